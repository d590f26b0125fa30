//! Enqueuing rules and their building blocks.
//!
//! ## Contents
//! - [`Rule`] one admission check (mode, gauge, precedence, remediation)
//! - [`RuleMode`] comparison semantics (`Max` / `Min` / unrecognized)
//! - [`Gauge`], [`Threshold`] limit paired with a freshly evaluated condition
//! - [`Remediation`], [`Retry`], [`RetryFn`] fallback when a rule is not met
//!
//! ## Quick wiring
//! ```text
//! Job::enqueuing_rules() ─► Vec<Rule>
//!      └─► Gate::submit(args):
//!           - sort by precedence
//!           - rule.gauge.probe() compared under rule.mode
//!           - first failure ─► rule.remediation
//! ```

mod gauge;
mod mode;
mod remediation;
mod rule;

pub use gauge::{Gauge, GaugeRef, Threshold};
pub use mode::{RuleMode, UnknownModePolicy};
pub use remediation::{Callback, Remediation, Retry, RetryFn, RetryOutcome, RetryRef};
pub use rule::Rule;
