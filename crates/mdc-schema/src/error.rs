//! Errors raised while compiling a constitution's strict profile.
//!
//! These are fatal for the run. A rule that cannot be understood is never
//! skipped, since skipping it would silently drop required checks.

use thiserror::Error;

/// The constitution's strict profile cannot be compiled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A `requireIf` condition has no `==` separator.
    #[error("malformed requireIf condition {when:?}: expected `<path> == <literal>`")]
    MalformedCondition {
        /// The condition text as written in the constitution.
        when: String,
    },

    /// A profile entry has the wrong structure.
    #[error("{location} must be {expected}, found {found}")]
    InvalidShape {
        /// Dotted location of the entry inside the constitution.
        location: String,
        /// What the entry must be.
        expected: &'static str,
        /// What was found instead.
        found: &'static str,
    },
}
