//! # Deferral: retry-until-admitted.
//!
//! [`Defer`] is the built-in [`Retry`]: it suspends the submitting task for a fixed
//! interval, then hands the original arguments back to [`Gate::submit`], which
//! re-runs the **whole** rule chain from the top.
//!
//! ```text
//! submit(args) ─► rule denied ─► Defer::retry
//!      ▲                            ├─► publish DeferScheduled
//!      │                            ├─► sleep(interval)        (task suspended, worker free)
//!      └──── Resubmit(args) ◄───────┘
//! ```
//!
//! ## Rules
//! - The interval is fixed; there is no backoff growth.
//! - There is no attempt ceiling: a condition that never clears defers forever.
//! - Each attempt finishes before the next starts; the depth of the submit future
//!   does not grow with the number of deferrals.
//! - A pending deferral cannot be cancelled except by dropping the submit future.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::AdmissionError;
use crate::jobs::Job;
use crate::rules::{Retry, RetryOutcome};

use super::engine::Gate;

/// Sleep-then-resubmit remediation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Defer {
    interval: Duration,
}

impl Defer {
    /// Creates a deferral with a fixed interval.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Returns the deferral interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[async_trait]
impl<J: Job> Retry<J> for Defer {
    fn name(&self) -> &str {
        "defer"
    }

    async fn retry(
        &self,
        gate: Gate<J>,
        args: J::Args,
    ) -> Result<RetryOutcome<J::Args>, AdmissionError> {
        gate.wait(self.interval).await;
        Ok(RetryOutcome::Resubmit(args))
    }
}
