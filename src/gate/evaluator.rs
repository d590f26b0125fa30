//! # Condition evaluator.
//!
//! Compares a rule's limit with a freshly observed value under the rule's mode:
//!
//! ```text
//! Max          → pass iff limit > condition()
//! Min          → pass iff limit < condition()
//! Unrecognized → no verdict (condition not invoked); callers fail closed
//! ```
//!
//! ## Rules
//! - `condition()` runs **exactly once** per evaluation of a known mode
//! - no memoization, no retry
//! - incomparable values (e.g. `NaN`) never pass

use std::cmp::Ordering;

use crate::jobs::Job;
use crate::rules::{Rule, RuleMode};

/// Evaluates `rule` once.
///
/// Returns `None` when the mode is unrecognized; the gauge is not probed in that case.
pub(crate) fn evaluate<J: Job>(rule: &Rule<J>) -> Option<bool> {
    let wanted = match rule.mode() {
        RuleMode::Max => Ordering::Greater,
        RuleMode::Min => Ordering::Less,
        RuleMode::Unrecognized(_) => return None,
    };
    Some(rule.gauge().probe() == Some(wanted))
}

/// Evaluates `rule` once, treating an unrecognized mode as not met.
pub(crate) fn check<J: Job>(rule: &Rule<J>) -> bool {
    evaluate(rule).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    struct Probe;

    impl Job for Probe {
        type Args = ();

        fn name(&self) -> &str {
            "probe"
        }
    }

    #[test]
    fn max_passes_strictly_below_limit() {
        assert!(Rule::<Probe>::max(1, || 0).check());
        assert!(!Rule::<Probe>::max(1, || 1).check());
        assert!(!Rule::<Probe>::max(1, || 2).check());
    }

    #[test]
    fn min_passes_strictly_beyond_limit() {
        assert!(Rule::<Probe>::min(1, || 2).check());
        assert!(!Rule::<Probe>::min(1, || 1).check());
        assert!(!Rule::<Probe>::min(1, || 0).check());
    }

    #[test]
    fn min_works_as_not_before_gate() {
        let now = Instant::now();
        assert!(!Rule::<Probe>::min(now + Duration::from_secs(60), Instant::now).check());
        assert!(Rule::<Probe>::min(now - Duration::from_millis(1), Instant::now).check());
    }

    #[test]
    fn nan_never_passes() {
        assert!(!Rule::<Probe>::max(1.0, || f64::NAN).check());
        assert!(!Rule::<Probe>::min(1.0, || f64::NAN).check());
    }

    #[test]
    fn unknown_mode_fails_without_probing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let rule = Rule::<Probe>::new("avg", 100, move || {
            counter.fetch_add(1, AtomicOrdering::SeqCst);
            0
        });

        assert_eq!(evaluate(&rule), None);
        assert!(!rule.check());
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn pure_condition_is_idempotent() {
        let rule = Rule::<Probe>::max(5, || 3);
        assert_eq!(rule.check(), rule.check());
    }

    #[test]
    fn condition_is_evaluated_fresh_each_check() {
        let depth = Arc::new(AtomicUsize::new(0));
        let observed = depth.clone();
        let rule = Rule::<Probe>::max(2usize, move || observed.load(AtomicOrdering::SeqCst));

        assert!(rule.check());
        depth.store(2, AtomicOrdering::SeqCst);
        assert!(!rule.check());
    }
}
