//! # Gauges: a rule's limit paired with its condition.
//!
//! A [`Gauge`] hides the value type of a rule so that one job can mix numeric
//! and time-like rules in the same list. Each [`Gauge::probe`] invokes the
//! condition exactly once and reports how the limit compares with the observed value.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::sync::Arc;

/// Type-erased comparison between a limit and a freshly observed value.
pub trait Gauge: Send + Sync + 'static {
    /// Invokes the condition once and returns `limit.partial_cmp(&observed)`.
    ///
    /// `None` means the two values are incomparable (e.g. `NaN`).
    fn probe(&self) -> Option<Ordering>;

    /// Returns the configured limit for logs, events and `Debug` output.
    fn limit(&self) -> &dyn Debug;
}

/// Shared handle to a gauge.
pub type GaugeRef = Arc<dyn Gauge>;

/// Function-backed gauge: a fixed `limit` and a `condition` evaluated on every probe.
pub struct Threshold<V, F> {
    limit: V,
    condition: F,
}

impl<V, F> Threshold<V, F> {
    /// Creates a new threshold gauge.
    pub fn new(limit: V, condition: F) -> Self {
        Self { limit, condition }
    }
}

impl<V, F> Gauge for Threshold<V, F>
where
    V: PartialOrd + Debug + Send + Sync + 'static,
    F: Fn() -> V + Send + Sync + 'static,
{
    fn probe(&self) -> Option<Ordering> {
        let observed = (self.condition)();
        tracing::trace!(limit = ?self.limit, observed = ?observed, "probing enqueuing condition");
        self.limit.partial_cmp(&observed)
    }

    fn limit(&self) -> &dyn Debug {
        &self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    #[test]
    fn probe_compares_limit_to_observed() {
        assert_eq!(Threshold::new(1, || 0).probe(), Some(Ordering::Greater));
        assert_eq!(Threshold::new(1, || 1).probe(), Some(Ordering::Equal));
        assert_eq!(Threshold::new(1, || 2).probe(), Some(Ordering::Less));
        assert_eq!(Threshold::new(1.0, || f64::NAN).probe(), None);
    }

    #[test]
    fn limit_is_visible_through_the_trait_object() {
        let gauge: GaugeRef = Arc::new(Threshold::new(2usize, || 0usize));
        assert_eq!(format!("{:?}", gauge.limit()), "2");
    }

    #[test]
    fn condition_runs_once_per_probe() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let gauge = Threshold::new(10usize, move || counter.fetch_add(1, AtomicOrdering::SeqCst));

        gauge.probe();
        gauge.probe();
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 2);
    }
}
