//! # Comparison modes for enqueuing rules.
//!
//! [`RuleMode`] determines how a rule's limit is compared with the freshly observed value.
//!
//! - [`RuleMode::Max`] the observed value must stay strictly below the limit (a ceiling).
//! - [`RuleMode::Min`] the observed value must be strictly beyond the limit (a floor,
//!   e.g. "not before time T").
//! - [`RuleMode::Unrecognized`] any other label; the rule never passes.
//!
//! ## Choosing the right mode
//! ```text
//! "at most 2 jobs queued"       → Max, limit = 2,     condition = queue depth
//! "not before 09:00"            → Min, limit = 09:00, condition = now
//! ```

use std::fmt;
use std::sync::Arc;

/// Comparison semantics of a rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuleMode {
    /// Pass iff `limit > condition()`.
    Max,
    /// Pass iff `limit < condition()`.
    Min,
    /// Label that is neither `max` nor `min`; fails closed.
    Unrecognized(Arc<str>),
}

impl RuleMode {
    /// Returns the lowercase label of this mode.
    pub fn as_str(&self) -> &str {
        match self {
            RuleMode::Max => "max",
            RuleMode::Min => "min",
            RuleMode::Unrecognized(label) => label,
        }
    }

    /// Returns `true` for [`RuleMode::Max`] and [`RuleMode::Min`].
    pub fn is_known(&self) -> bool {
        !matches!(self, RuleMode::Unrecognized(_))
    }
}

impl From<&str> for RuleMode {
    /// Parses a mode label case-insensitively; never fails.
    fn from(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "max" => RuleMode::Max,
            "min" => RuleMode::Min,
            _ => RuleMode::Unrecognized(Arc::from(label)),
        }
    }
}

impl fmt::Display for RuleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the gate does when it meets a rule with an [`RuleMode::Unrecognized`] mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownModePolicy {
    /// Treat the rule as not met and run its remediation (default).
    #[default]
    FailClosed,
    /// Abort the submission with [`AdmissionError::UnknownMode`](crate::AdmissionError::UnknownMode).
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_labels_case_insensitively() {
        assert_eq!(RuleMode::from("max"), RuleMode::Max);
        assert_eq!(RuleMode::from("MIN"), RuleMode::Min);
        assert_eq!(RuleMode::from(" Max "), RuleMode::Max);
    }

    #[test]
    fn keeps_unknown_label() {
        let mode = RuleMode::from("avg");
        assert!(!mode.is_known());
        assert_eq!(mode.to_string(), "avg");
    }
}
