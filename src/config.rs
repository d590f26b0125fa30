//! # Gate configuration.
//!
//! Provides [`GateConfig`], the settings shared by every submission going through a
//! [`Gate`](crate::Gate).
//!
//! ## Sentinel values
//! - `bus_capacity = 0` → clamped to 1 by the bus

use crate::rules::UnknownModePolicy;

/// Configuration for an admission gate.
///
/// ## Field semantics
/// - `bus_capacity`: Event bus ring buffer size (min 1; clamped by Bus)
/// - `unknown_mode`: What to do with rules declaring an unrecognized mode
#[derive(Clone, Debug)]
pub struct GateConfig {
    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Receivers lagging more than `bus_capacity` events observe `Lagged` and skip
    /// older items.
    pub bus_capacity: usize,

    /// Handling of rules whose mode is neither `max` nor `min`.
    ///
    /// - `FailClosed` = the rule never passes; its remediation runs
    /// - `Reject` = `submit` returns `AdmissionError::UnknownMode`
    pub unknown_mode: UnknownModePolicy,
}

impl GateConfig {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for GateConfig {
    /// Default configuration:
    ///
    /// - `bus_capacity = 256`
    /// - `unknown_mode = UnknownModePolicy::FailClosed`
    fn default() -> Self {
        Self {
            bus_capacity: 256,
            unknown_mode: UnknownModePolicy::FailClosed,
        }
    }
}
