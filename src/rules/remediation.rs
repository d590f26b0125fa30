//! # Remediation: what happens when a rule is not met.
//!
//! A [`Remediation`] is attached to every [`Rule`](crate::Rule) and runs only when
//! that rule denies admission:
//!
//! - [`Remediation::None`] silently abandons the submission.
//! - [`Remediation::Callback`] runs a zero-argument action, unrelated to the job arguments.
//! - [`Remediation::Retry`] re-invokes a [`Retry`] with a handle to the gate and the
//!   original arguments. [`Defer`](crate::Defer) is the built-in retry; [`RetryFn`]
//!   wraps any closure together with its extra arguments.
//!
//! A retry finishes with a [`RetryOutcome`]. `Resubmit(args)` hands the arguments back
//! to the gate, which runs the rule chain again from the top in the same loop, so an
//! unbounded number of resubmissions never nests futures.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use taskgate::{AdmissionError, Gate, Job, Remediation, RetryOutcome, Rule};
//!
//! struct Report;
//!
//! impl Job for Report {
//!     type Args = u32;
//!
//!     fn name(&self) -> &str { "report" }
//! }
//!
//! // Retry with an extra "attempt" marker passed ahead of the job arguments.
//! let retry: Remediation<Report> = Remediation::retry_fn("requeue", 1u8, |_gate: Gate<Report>, _extra: u8, id: u32| async move {
//!     Ok::<_, AdmissionError>(RetryOutcome::Resubmit(id))
//! });
//! assert_eq!(retry.kind(), "retry");
//!
//! let defer: Remediation<Report> = Remediation::defer(Duration::from_secs(1));
//! assert_eq!(defer.kind(), "retry");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::AdmissionError;
use crate::gate::{Defer, Gate};
use crate::jobs::Job;

/// Zero-argument remediation action.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Shared handle to a retry remediation.
pub type RetryRef<J> = Arc<dyn Retry<J>>;

/// What the gate does after a [`Retry`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome<A> {
    /// The retry consumed the submission; nothing else runs.
    Done,
    /// Run the whole rule chain again with these arguments.
    Resubmit(A),
}

/// # Re-entrant remediation.
///
/// A `Retry` receives a clone of the [`Gate`] that rejected the submission and the
/// original arguments. Returning [`RetryOutcome::Resubmit`] re-runs admission from
/// the top inside the same [`Gate::submit`] call.
#[async_trait]
pub trait Retry<J: Job>: Send + Sync + 'static {
    /// Returns a stable, human-readable retry name.
    fn name(&self) -> &str;

    /// Runs the retry for a rejected submission.
    ///
    /// An `Err` is returned to the caller of the original [`Gate::submit`].
    async fn retry(
        &self,
        gate: Gate<J>,
        args: J::Args,
    ) -> Result<RetryOutcome<J::Args>, AdmissionError>;
}

/// Function-backed retry.
///
/// Wraps a closure `F: Fn(Gate<J>, E, J::Args) -> Fut`; the `extra` value is cloned
/// and passed ahead of the original arguments on every invocation.
pub struct RetryFn<E, F> {
    name: Cow<'static, str>,
    extra: E,
    f: F,
}

impl<E, F> RetryFn<E, F> {
    /// Creates a new function-backed retry.
    pub fn new(name: impl Into<Cow<'static, str>>, extra: E, f: F) -> Self {
        Self {
            name: name.into(),
            extra,
            f,
        }
    }

    /// Returns the extra arguments passed ahead of the job arguments.
    pub fn extra(&self) -> &E {
        &self.extra
    }
}

#[async_trait]
impl<J, E, F, Fut> Retry<J> for RetryFn<E, F>
where
    J: Job,
    E: Clone + Send + Sync + 'static,
    F: Fn(Gate<J>, E, J::Args) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<RetryOutcome<J::Args>, AdmissionError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn retry(
        &self,
        gate: Gate<J>,
        args: J::Args,
    ) -> Result<RetryOutcome<J::Args>, AdmissionError> {
        (self.f)(gate, self.extra.clone(), args).await
    }
}

/// Fallback action taken when a rule's condition is not met.
pub enum Remediation<J: Job> {
    /// Abandon the submission silently.
    None,
    /// Run a zero-argument action.
    Callback(Callback),
    /// Re-invoke a retry with the gate and the original arguments.
    Retry(RetryRef<J>),
}

impl<J: Job> Remediation<J> {
    /// Builds a [`Remediation::Callback`] from a closure.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Remediation::Callback(Arc::new(f))
    }

    /// Builds a [`Remediation::Retry`] from any [`Retry`] implementation.
    pub fn retry<R: Retry<J>>(retry: R) -> Self {
        Remediation::Retry(Arc::new(retry))
    }

    /// Builds a [`Remediation::Retry`] backed by a closure and its extra arguments.
    pub fn retry_fn<E, F, Fut>(name: impl Into<Cow<'static, str>>, extra: E, f: F) -> Self
    where
        E: Clone + Send + Sync + 'static,
        F: Fn(Gate<J>, E, J::Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RetryOutcome<J::Args>, AdmissionError>> + Send + 'static,
    {
        Self::retry(RetryFn::new(name, extra, f))
    }

    /// Builds a deferral: sleep `interval`, then resubmit through the gate.
    pub fn defer(interval: Duration) -> Self {
        Self::retry(Defer::new(interval))
    }

    /// Returns a short label of the remediation shape.
    pub fn kind(&self) -> &'static str {
        match self {
            Remediation::None => "none",
            Remediation::Callback(_) => "callback",
            Remediation::Retry(_) => "retry",
        }
    }
}

impl<J: Job> Default for Remediation<J> {
    fn default() -> Self {
        Remediation::None
    }
}

impl<J: Job> Clone for Remediation<J> {
    fn clone(&self) -> Self {
        match self {
            Remediation::None => Remediation::None,
            Remediation::Callback(f) => Remediation::Callback(Arc::clone(f)),
            Remediation::Retry(r) => Remediation::Retry(Arc::clone(r)),
        }
    }
}

impl<J: Job> fmt::Debug for Remediation<J> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Remediation::None => f.write_str("None"),
            Remediation::Callback(_) => f.write_str("Callback(..)"),
            Remediation::Retry(r) => f.debug_tuple("Retry").field(&r.name()).finish(),
        }
    }
}
