//! # Gate: the admission engine.
//!
//! [`Gate`] wraps a [`Dispatch`](crate::Dispatch) primitive and decides, per
//! submission, whether the job's arguments reach it.
//!
//! ## Flow
//! ```text
//! submit(args)
//!   ├─► job.enqueuing_rules()          None ─► Err(UnimplementedRules)
//!   ├─► sort_by_precedence(rules)      (stable; ≤1 rule untouched)
//!   ├─► for rule in rules:
//!   │     ├─ passes          ─► next rule
//!   │     ├─ unknown mode    ─► FailClosed: treat as denied | Reject: Err(UnknownMode)
//!   │     └─ denied          ─► remediate(rule, args)
//!   │                              Done ─► stop | Resubmit(args) ─► back to the top
//!   └─► all passed ─► dispatch(args)   (exactly once)
//! ```
//!
//! ## Rules
//! - Rules are evaluated **sequentially**; the first denial short-circuits.
//! - `args` are moved, never cloned: either dispatch or the remediation receives them.
//! - Only `UnimplementedRules`, `UnknownMode` under `Reject`, and errors returned by a
//!   retry cross the boundary; denials are absorbed by remediation.
//! - A resubmission is another turn of the attempt loop, never a nested `submit`.
//! - The gate is cheap to clone; clones share job, dispatch, config and bus.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;
use tracing::{debug, trace, warn};

use crate::config::GateConfig;
use crate::error::AdmissionError;
use crate::events::{Bus, Event, EventKind, Subscription};
use crate::jobs::{DispatchRef, Job};
use crate::rules::{RetryOutcome, Rule, UnknownModePolicy};

use super::{builder::GateBuilder, evaluator, precedence::sort_by_precedence, remediate::remediate};

/// Admission gate in front of a task-dispatch primitive.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use taskgate::{DispatchFn, Gate, Job, Rule};
///
/// struct Mailer;
///
/// impl Job for Mailer {
///     type Args = String;
///
///     fn name(&self) -> &str { "mailer" }
///
///     fn enqueuing_rules(&self) -> Option<Vec<Rule<Self>>> {
///         Some(vec![Rule::max(1, || 0)])
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), taskgate::AdmissionError> {
/// let sent = Arc::new(AtomicUsize::new(0));
/// let counter = sent.clone();
/// let gate = Gate::new(Mailer, DispatchFn::arc(move |_to: String| {
///     counter.fetch_add(1, Ordering::SeqCst);
///     async {}
/// }));
///
/// gate.submit("ops@example.com".to_string()).await?;
/// assert_eq!(sent.load(Ordering::SeqCst), 1);
/// # Ok(())
/// # }
/// ```
pub struct Gate<J: Job> {
    inner: Arc<Inner<J>>,
}

struct Inner<J: Job> {
    job: J,
    dispatch: DispatchRef<J::Args>,
    config: GateConfig,
    bus: Bus,
}

impl<J: Job> Clone for Gate<J> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<J: Job> Gate<J> {
    /// Creates a gate with default configuration.
    pub fn new(job: J, dispatch: DispatchRef<J::Args>) -> Self {
        Self::builder(job, dispatch).build()
    }

    /// Returns a builder for a gate with custom configuration.
    pub fn builder(job: J, dispatch: DispatchRef<J::Args>) -> GateBuilder<J> {
        GateBuilder::new(job, dispatch)
    }

    pub(super) fn from_parts(job: J, dispatch: DispatchRef<J::Args>, config: GateConfig) -> Self {
        let bus = Bus::new(config.bus_capacity_clamped());
        Self {
            inner: Arc::new(Inner {
                job,
                dispatch,
                config,
                bus,
            }),
        }
    }

    /// Returns the gated job.
    pub fn job(&self) -> &J {
        &self.inner.job
    }

    /// Returns the gate configuration.
    pub fn config(&self) -> &GateConfig {
        &self.inner.config
    }

    /// Creates a receiver for admission events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.inner.bus.subscribe()
    }

    /// Creates a subscription that only yields events of the given kinds.
    pub fn subscribe_kinds(&self, kinds: &[EventKind]) -> Subscription {
        self.inner.bus.subscribe_kinds(kinds)
    }

    pub(crate) fn bus(&self) -> &Bus {
        &self.inner.bus
    }

    /// Submits one unit of work through the job's enqueuing rules.
    ///
    /// Dispatches `args` exactly once if every rule passes; otherwise runs the
    /// remediation of the first denying rule. A retry that resubmits restarts
    /// admission from the top within this call.
    ///
    /// ### Errors
    /// - [`AdmissionError::UnimplementedRules`] if the job provides no rules, before
    ///   any evaluation, remediation or dispatch.
    /// - [`AdmissionError::UnknownMode`] under [`UnknownModePolicy::Reject`].
    /// - Whatever a retry remediation returns, including on a later attempt.
    pub async fn submit(&self, args: J::Args) -> Result<(), AdmissionError> {
        let mut args = args;
        let mut attempt: u64 = 1;

        loop {
            match self.attempt(args).await? {
                RetryOutcome::Done => return Ok(()),
                RetryOutcome::Resubmit(next) => {
                    attempt += 1;
                    trace!(job = self.inner.job.name(), attempt, "resubmitting from the top");
                    args = next;
                }
            }
        }
    }

    /// Suspends the current task for `interval`, then submits `args` from the top.
    ///
    /// Only the calling task waits; the runtime worker is free to run other tasks.
    pub async fn defer(&self, interval: Duration, args: J::Args) -> Result<(), AdmissionError> {
        self.wait(interval).await;
        self.submit(args).await
    }

    /// Announces a deferral and sleeps for `interval`.
    pub(crate) async fn wait(&self, interval: Duration) {
        let job = self.inner.job.name();
        debug!(job, delay = ?interval, "deferring submission");
        self.inner.bus.publish(
            Event::new(EventKind::DeferScheduled)
                .with_job(job)
                .with_delay(interval),
        );
        time::sleep(interval).await;
    }

    /// Runs the rule chain once.
    async fn attempt(&self, args: J::Args) -> Result<RetryOutcome<J::Args>, AdmissionError> {
        let job = self.inner.job.name();
        let Some(rules) = self.inner.job.enqueuing_rules() else {
            self.inner
                .bus
                .publish(Event::new(EventKind::RulesMissing).with_job(job));
            return Err(AdmissionError::UnimplementedRules {
                job: job.to_string(),
            });
        };

        for rule in sort_by_precedence(rules) {
            if self.admits(&rule)? {
                continue;
            }

            debug!(
                job,
                rule = rule.name(),
                limit = ?rule.limit(),
                remediation = rule.remediation().kind(),
                "rejected for enqueuing, executing remediation"
            );
            self.inner.bus.publish(
                Event::new(EventKind::RuleDenied)
                    .with_job(job)
                    .with_rule(rule.name())
                    .with_precedence(rule.precedence())
                    .with_limit(rule.limit())
                    .with_reason(rule.remediation().kind()),
            );
            return remediate(self, rule, args).await;
        }

        debug!(job, "dispatching after checking enqueuing conditions");
        self.inner
            .bus
            .publish(Event::new(EventKind::Dispatched).with_job(job));
        self.inner.dispatch.dispatch(args).await;
        Ok(RetryOutcome::Done)
    }

    /// Evaluates one rule, applying the unknown-mode policy.
    fn admits(&self, rule: &Rule<J>) -> Result<bool, AdmissionError> {
        let job = self.inner.job.name();

        match evaluator::evaluate(rule) {
            Some(true) => {
                trace!(job, rule = rule.name(), "enqueuing condition met");
                self.inner.bus.publish(
                    Event::new(EventKind::RulePassed)
                        .with_job(job)
                        .with_rule(rule.name())
                        .with_precedence(rule.precedence()),
                );
                Ok(true)
            }
            Some(false) => Ok(false),
            None => {
                warn!(job, rule = rule.name(), mode = %rule.mode(), "rule declares unrecognized mode");
                self.inner.bus.publish(
                    Event::new(EventKind::UnknownMode)
                        .with_job(job)
                        .with_rule(rule.name())
                        .with_reason(rule.mode().as_str()),
                );
                match self.inner.config.unknown_mode {
                    UnknownModePolicy::FailClosed => Ok(false),
                    UnknownModePolicy::Reject => Err(AdmissionError::UnknownMode {
                        job: job.to_string(),
                        rule: rule.name().to_string(),
                        mode: rule.mode().to_string(),
                    }),
                }
            }
        }
    }
}
