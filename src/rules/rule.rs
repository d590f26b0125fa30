//! # Enqueuing rule.
//!
//! A [`Rule`] describes one admission check: a comparison [`RuleMode`], a gauge
//! (limit + condition), a precedence and the [`Remediation`] to run when the check fails.
//!
//! Rules are cheap to clone (shared `Arc` internals) and are typically rebuilt by
//! [`Job::enqueuing_rules`](crate::Job::enqueuing_rules) on every submission.
//!
//! ## Example
//! ```rust
//! use std::time::{Duration, Instant};
//! use taskgate::{Job, Rule, RuleMode};
//!
//! struct Digest;
//!
//! impl Job for Digest {
//!     type Args = ();
//!
//!     fn name(&self) -> &str { "digest" }
//! }
//!
//! let depth = Rule::<Digest>::max(2usize, || 0usize)
//!     .with_name("queue-depth")
//!     .with_precedence(1)
//!     .with_defer(Duration::from_secs(1));
//! assert!(depth.check());
//!
//! let not_before = Rule::<Digest>::min(Instant::now() + Duration::from_secs(60), Instant::now);
//! assert_eq!(not_before.mode(), &RuleMode::Min);
//! assert!(!not_before.check());
//! ```

use std::borrow::Cow;
use std::fmt::{self, Debug};
use std::sync::Arc;
use std::time::Duration;

use crate::gate::evaluator;
use crate::jobs::Job;

use super::{
    gauge::{GaugeRef, Threshold},
    mode::RuleMode,
    remediation::Remediation,
};

/// One admission check evaluated at submission time.
pub struct Rule<J: Job> {
    name: Cow<'static, str>,
    precedence: i32,
    mode: RuleMode,
    gauge: GaugeRef,
    remediation: Remediation<J>,
}

impl<J: Job> Rule<J> {
    /// Creates a rule comparing `limit` with `condition()` under `mode`.
    ///
    /// ### Parameters
    /// - `mode`: [`RuleMode`] or a label such as `"max"`/`"min"`
    /// - `limit`: ceiling (`Max`) or floor (`Min`)
    /// - `condition`: evaluated fresh on every check
    pub fn new<V, F>(mode: impl Into<RuleMode>, limit: V, condition: F) -> Self
    where
        V: PartialOrd + Debug + Send + Sync + 'static,
        F: Fn() -> V + Send + Sync + 'static,
    {
        Self::from_gauge(mode, Arc::new(Threshold::new(limit, condition)))
    }

    /// Creates a rule that passes while `condition()` stays strictly below `limit`.
    pub fn max<V, F>(limit: V, condition: F) -> Self
    where
        V: PartialOrd + Debug + Send + Sync + 'static,
        F: Fn() -> V + Send + Sync + 'static,
    {
        Self::new(RuleMode::Max, limit, condition)
    }

    /// Creates a rule that passes once `condition()` is strictly beyond `limit`.
    pub fn min<V, F>(limit: V, condition: F) -> Self
    where
        V: PartialOrd + Debug + Send + Sync + 'static,
        F: Fn() -> V + Send + Sync + 'static,
    {
        Self::new(RuleMode::Min, limit, condition)
    }

    /// Creates a rule from an existing gauge.
    pub fn from_gauge(mode: impl Into<RuleMode>, gauge: GaugeRef) -> Self {
        Self {
            name: Cow::Borrowed("rule"),
            precedence: 0,
            mode: mode.into(),
            gauge,
            remediation: Remediation::None,
        }
    }

    /// Returns a new rule with the given name (used in logs and events).
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns a new rule with the given precedence (lower runs first).
    pub fn with_precedence(mut self, precedence: i32) -> Self {
        self.precedence = precedence;
        self
    }

    /// Returns a new rule with the given remediation.
    pub fn with_remediation(mut self, remediation: Remediation<J>) -> Self {
        self.remediation = remediation;
        self
    }

    /// Shorthand for [`Remediation::callback`].
    pub fn with_callback<F>(self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.with_remediation(Remediation::callback(f))
    }

    /// Shorthand for [`Remediation::defer`].
    pub fn with_defer(self, interval: Duration) -> Self {
        self.with_remediation(Remediation::defer(interval))
    }

    /// Returns the rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the precedence.
    pub fn precedence(&self) -> i32 {
        self.precedence
    }

    /// Returns the comparison mode.
    pub fn mode(&self) -> &RuleMode {
        &self.mode
    }

    /// Returns the limit compared against the condition.
    pub fn limit(&self) -> &dyn Debug {
        self.gauge.limit()
    }

    /// Returns the gauge.
    pub fn gauge(&self) -> &GaugeRef {
        &self.gauge
    }

    /// Returns the remediation.
    pub fn remediation(&self) -> &Remediation<J> {
        &self.remediation
    }

    /// Evaluates the rule once; unrecognized modes fail closed.
    pub fn check(&self) -> bool {
        evaluator::check(self)
    }

    pub(crate) fn into_remediation(self) -> Remediation<J> {
        self.remediation
    }
}

impl<J: Job> Clone for Rule<J> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            precedence: self.precedence,
            mode: self.mode.clone(),
            gauge: Arc::clone(&self.gauge),
            remediation: self.remediation.clone(),
        }
    }
}

impl<J: Job> fmt::Debug for Rule<J> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("precedence", &self.precedence)
            .field("mode", &self.mode)
            .field("limit", self.gauge.limit())
            .field("remediation", &self.remediation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Digest;

    impl Job for Digest {
        type Args = ();

        fn name(&self) -> &str {
            "digest"
        }
    }

    #[test]
    fn limit_is_reported_by_accessor_and_debug() {
        let rule = Rule::<Digest>::max(2usize, || 0usize).with_name("queue-depth");

        assert_eq!(format!("{:?}", rule.limit()), "2");
        let rendered = format!("{rule:?}");
        assert!(rendered.contains("limit: 2"), "{rendered}");
        assert!(rendered.contains("name: \"queue-depth\""), "{rendered}");
    }

    #[test]
    fn builders_keep_the_gauge() {
        let rule = Rule::<Digest>::min(1.5, || 0.0)
            .with_precedence(-1)
            .with_callback(|| {});

        assert_eq!(rule.precedence(), -1);
        assert_eq!(rule.remediation().kind(), "callback");
        assert_eq!(format!("{:?}", rule.limit()), "1.5");
    }
}
