//! # Admission events emitted by the gate.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Evaluation events**: a rule passed, was denied, or declared an unknown mode
//! - **Remediation events**: callback or retry invoked, submission abandoned, deferral scheduled
//! - **Outcome events**: submission dispatched, or rules missing
//!
//! The [`Event`] struct carries additional metadata such as timestamps, job and rule
//! names, precedence and deferral delays.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use taskgate::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::DeferScheduled)
//!     .with_job("report")
//!     .with_rule("not-before")
//!     .with_delay(Duration::from_secs(1));
//!
//! assert_eq!(ev.kind, EventKind::DeferScheduled);
//! assert_eq!(ev.delay_ms, Some(1000));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of admission events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Evaluation ===
    /// Rule condition met.
    ///
    /// Sets: `job`, `rule`, `precedence`
    RulePassed,

    /// Rule condition not met; its remediation runs next.
    ///
    /// Sets: `job`, `rule`, `precedence`, `limit`, `reason` (remediation kind)
    RuleDenied,

    /// Rule declares a mode other than `max`/`min`.
    ///
    /// Sets: `job`, `rule`, `reason` (the mode label)
    UnknownMode,

    // === Remediation ===
    /// Callback remediation invoked.
    ///
    /// Sets: `job`, `rule`
    CallbackInvoked,

    /// Retry remediation invoked.
    ///
    /// Sets: `job`, `rule`, `reason` (retry name)
    RetryInvoked,

    /// Rule had no remediation; the submission is abandoned.
    ///
    /// Sets: `job`, `rule`
    SubmissionAborted,

    /// Deferral started; the submission is retried after `delay_ms`.
    ///
    /// Sets: `job`, `delay_ms`
    DeferScheduled,

    // === Outcome ===
    /// All rules passed; arguments handed to dispatch.
    ///
    /// Sets: `job`
    Dispatched,

    /// Job does not provide enqueuing rules.
    ///
    /// Sets: `job`
    RulesMissing,
}

/// Admission event with optional metadata.
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Name of the job.
    pub job: Option<Arc<str>>,
    /// Name of the rule, if applicable.
    pub rule: Option<Arc<str>>,
    /// Precedence of the rule, if applicable.
    pub precedence: Option<i32>,
    /// Rule limit rendered with `Debug`, if applicable.
    pub limit: Option<Arc<str>>,
    /// Deferral delay in milliseconds (compact).
    pub delay_ms: Option<u32>,
    /// Human-readable detail (remediation kind, retry name, mode label).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            job: None,
            rule: None,
            precedence: None,
            limit: None,
            delay_ms: None,
            reason: None,
        }
    }

    /// Attaches a job name.
    #[inline]
    pub fn with_job(mut self, job: impl Into<Arc<str>>) -> Self {
        self.job = Some(job.into());
        self
    }

    /// Attaches a rule name.
    #[inline]
    pub fn with_rule(mut self, rule: impl Into<Arc<str>>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Attaches a rule precedence.
    #[inline]
    pub fn with_precedence(mut self, precedence: i32) -> Self {
        self.precedence = Some(precedence);
        self
    }

    /// Attaches a rule limit, rendered with `Debug`.
    #[inline]
    pub fn with_limit(mut self, limit: impl fmt::Debug) -> Self {
        self.limit = Some(Arc::from(format!("{limit:?}")));
        self
    }

    /// Attaches a deferral delay (stored as milliseconds).
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.delay_ms = Some(ms);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic() {
        let a = Event::new(EventKind::RulePassed);
        let b = Event::new(EventKind::RulePassed);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn limit_is_rendered_with_debug() {
        let ev = Event::new(EventKind::RuleDenied).with_limit(2.5);
        assert_eq!(ev.limit.as_deref(), Some("2.5"));
    }

    #[test]
    fn delay_saturates_at_u32() {
        let ev = Event::new(EventKind::DeferScheduled).with_delay(Duration::from_secs(u64::MAX));
        assert_eq!(ev.delay_ms, Some(u32::MAX));
    }
}
