//! # Error Hierarchy
//!
//! Fatal input errors, built with `thiserror`. A [`DocumentError`] means
//! the input could not be turned into a [`Value`](crate::Value) mapping at
//! all; the caller reports it and stops. Rule violations found in a
//! well-formed document are not errors and never appear here.

use thiserror::Error;

/// Failure to obtain a document mapping from raw input.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file that failed to read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Neither a fenced `yaml` block nor a `---` header was found.
    #[error("no YAML block found in {source_name} (expected a ```yaml fenced block or a --- front-matter header)")]
    BlockNotFound {
        /// Name of the input, usually its path.
        source_name: String,
    },

    /// The YAML block did not parse.
    #[error("failed to decode YAML in {source_name}: {reason}")]
    Decode {
        /// Name of the input, usually its path.
        source_name: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The YAML block parsed but its top level is not a mapping.
    #[error("YAML block in {source_name} must be a mapping, found {found}")]
    NotAMapping {
        /// Name of the input, usually its path.
        source_name: String,
        /// Kind of value found at the top level.
        found: &'static str,
    },
}

/// Two keys of one YAML mapping share the same text once non-string keys
/// are rendered in canonical form, e.g. `1` and `'1'`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("duplicate mapping key '{key}' (a non-string key collides with a string key of the same text)")]
pub struct DuplicateKey {
    /// The shared key text.
    pub key: String,
}
