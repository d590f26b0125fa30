//! # Job abstraction.
//!
//! A [`Job`] names a unit of work, fixes the type of its submission arguments and,
//! optionally, declares the enqueuing rules a [`Gate`](crate::Gate) evaluates before
//! dispatching it.
//!
//! The rule-provider capability is [`Job::enqueuing_rules`]. Its default returns
//! `None`, meaning "not implemented": submitting such a job fails with
//! [`AdmissionError::UnimplementedRules`](crate::AdmissionError::UnimplementedRules)
//! before anything else happens. An empty list is a valid implementation that admits
//! every submission.
//!
//! # Example
//! ```
//! use taskgate::{Job, Rule};
//!
//! struct Thumbnail;
//!
//! impl Job for Thumbnail {
//!     type Args = String;
//!
//!     fn name(&self) -> &str { "thumbnail" }
//!
//!     fn enqueuing_rules(&self) -> Option<Vec<Rule<Self>>> {
//!         Some(vec![Rule::max(4usize, || 0usize).with_name("in-flight")])
//!     }
//! }
//!
//! assert_eq!(Thumbnail.enqueuing_rules().map(|r| r.len()), Some(1));
//! ```

use crate::rules::Rule;

/// # Unit of work gated by enqueuing rules.
pub trait Job: Send + Sync + Sized + 'static {
    /// Arguments carried by one submission, moved into dispatch unchanged.
    type Args: Send + 'static;

    /// Returns a stable, human-readable job name.
    fn name(&self) -> &str;

    /// Returns the rules evaluated on every submission, rebuilt per call.
    ///
    /// `None` means the job does not provide rules.
    fn enqueuing_rules(&self) -> Option<Vec<Rule<Self>>> {
        None
    }
}
