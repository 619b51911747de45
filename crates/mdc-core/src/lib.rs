#![deny(missing_docs)]

//! # mdc-core — Foundational Types for MDC Conformance Checking
//!
//! This crate defines the data that every other crate in the workspace
//! reads. It has no internal crate dependencies.
//!
//! ## Design Principles
//!
//! 1. **Closed value model.** Both the document under test and the
//!    constitution are decoded into [`Value`], an exhaustive
//!    mapping / sequence / scalar union. Nothing downstream touches raw YAML.
//!
//! 2. **Absence is not failure.** [`resolve`] returns `None` for a path that
//!    does not exist; only the rule evaluators decide whether that matters.
//!
//! 3. **Decoding is the only fallible input step.** [`decode_document`] and
//!    [`load_document`] surface a [`DocumentError`] when no YAML block is
//!    present, the YAML does not parse (including mapping keys that collide
//!    once non-string keys are stringified), or the top level is not a mapping.

pub mod document;
pub mod error;
pub mod path;
pub mod value;

// Re-export primary types at crate root for ergonomic imports.
pub use document::{decode_document, extract_yaml_block, load_document};
pub use error::{DocumentError, DuplicateKey};
pub use path::{exists, resolve, DocPath, LIST_WILDCARD};
pub use value::{Scalar, Value};
