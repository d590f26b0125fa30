//! # Remediation dispatcher.
//!
//! Runs the remediation of the first rule that denied a submission:
//!
//! ```text
//! Callback(f)  → f(), Done
//! Retry(r)     → r.retry(gate.clone(), args).await  (Done or Resubmit(args))
//! None         → Done (silent abort)
//! ```
//!
//! The dispatcher never looks at *why* the rule failed; only the boolean verdict
//! reaches it.

use std::sync::Arc;

use tracing::debug;

use crate::error::AdmissionError;
use crate::events::{Event, EventKind};
use crate::jobs::Job;
use crate::rules::{Remediation, RetryOutcome, Rule};

use super::engine::Gate;

/// Runs `rule`'s remediation for the rejected `args`.
pub(crate) async fn remediate<J: Job>(
    gate: &Gate<J>,
    rule: Rule<J>,
    args: J::Args,
) -> Result<RetryOutcome<J::Args>, AdmissionError> {
    let job = gate.job().name();
    let name: Arc<str> = Arc::from(rule.name());

    match rule.into_remediation() {
        Remediation::Callback(f) => {
            gate.bus().publish(
                Event::new(EventKind::CallbackInvoked)
                    .with_job(job)
                    .with_rule(name),
            );
            (*f)();
            Ok(RetryOutcome::Done)
        }
        Remediation::Retry(retry) => {
            debug!(job, retry = retry.name(), "re-invoking through retry remediation");
            gate.bus().publish(
                Event::new(EventKind::RetryInvoked)
                    .with_job(job)
                    .with_rule(name)
                    .with_reason(retry.name()),
            );
            retry.retry(gate.clone(), args).await
        }
        Remediation::None => {
            debug!(job, rule = &*name, "no remediation; submission abandoned");
            gate.bus().publish(
                Event::new(EventKind::SubmissionAborted)
                    .with_job(job)
                    .with_rule(name),
            );
            Ok(RetryOutcome::Done)
        }
    }
}
