//! Admission engine: ordering, evaluation, remediation and deferral.
//!
//! The only public entry point is [`Gate`]; the rest are its building blocks.
//!
//! Internal modules:
//! - [`evaluator`]: compares limit and condition under the rule's mode;
//! - [`precedence`]: stable ordering of rules;
//! - [`remediate`]: runs the remediation of the first denying rule;
//! - [`defer`]: sleep-then-resubmit retry;
//! - [`engine`]: the gate itself.

mod builder;
mod defer;
mod engine;
pub(crate) mod evaluator;
mod precedence;
mod remediate;

pub use builder::GateBuilder;
pub use defer::Defer;
pub use engine::Gate;
pub use precedence::sort_by_precedence;
