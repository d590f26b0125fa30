//! Error types raised by the admission gate.
//!
//! Admission *denials* are never errors: they are routed through the rule's
//! remediation. [`AdmissionError`] covers the cases that cross the
//! [`Gate::submit`](crate::Gate::submit) boundary:
//!
//! - [`AdmissionError::UnimplementedRules`] — the job does not provide enqueuing rules.
//! - [`AdmissionError::UnknownMode`] — a rule declares an unrecognized mode and the
//!   gate is configured with [`UnknownModePolicy::Reject`](crate::UnknownModePolicy::Reject).

use thiserror::Error;

/// # Errors produced by the admission gate.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdmissionError {
    /// The job type does not implement `enqueuing_rules` but is submitted through a gate.
    ///
    /// Raised before any rule is evaluated, remediated or dispatched.
    #[error("{job} does not implement enqueuing_rules but is submitted through an admission gate")]
    UnimplementedRules {
        /// Name of the offending job.
        job: String,
    },

    /// A rule declares a mode other than `max`/`min`.
    #[error("rule {rule:?} of {job} declares unrecognized mode {mode:?}")]
    UnknownMode {
        /// Name of the job owning the rule.
        job: String,
        /// Name of the rule.
        rule: String,
        /// The unrecognized mode label.
        mode: String,
    },
}

impl AdmissionError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskgate::AdmissionError;
    ///
    /// let err = AdmissionError::UnimplementedRules { job: "mailer".into() };
    /// assert_eq!(err.as_label(), "admission_unimplemented_rules");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            AdmissionError::UnimplementedRules { .. } => "admission_unimplemented_rules",
            AdmissionError::UnknownMode { .. } => "admission_unknown_mode",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            AdmissionError::UnimplementedRules { job } => format!("no enqueuing rules: job={job}"),
            AdmissionError::UnknownMode { job, rule, mode } => {
                format!("unknown mode: job={job} rule={rule} mode={mode}")
            }
        }
    }

    /// Indicates whether the error is a development-time contract violation
    /// (the job is wired incorrectly) rather than a misconfigured rule.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, AdmissionError::UnimplementedRules { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        let missing = AdmissionError::UnimplementedRules { job: "a".into() };
        let unknown = AdmissionError::UnknownMode {
            job: "a".into(),
            rule: "depth".into(),
            mode: "avg".into(),
        };
        assert_eq!(missing.as_label(), "admission_unimplemented_rules");
        assert_eq!(unknown.as_label(), "admission_unknown_mode");
        assert!(missing.is_contract_violation());
        assert!(!unknown.is_contract_violation());
    }

    #[test]
    fn display_names_the_job() {
        let err = AdmissionError::UnimplementedRules { job: "FiveS".into() };
        assert!(err.to_string().starts_with("FiveS does not implement enqueuing_rules"));
        assert_eq!(err.as_message(), "no enqueuing rules: job=FiveS");
    }
}
