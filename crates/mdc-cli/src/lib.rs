//! # mdc-cli — MDC Document Validator
//!
//! Provides the `mdc-validate` binary:
//!
//! ```bash
//! mdc-validate features/billing.mdc Z0-Core-Universal-MDC-Architecture.md
//! mdc-validate --format json features/billing.mdc constitution.md
//! ```
//!
//! ## Exit status
//!
//! - `0` — the document satisfies the constitution (or is not in strict mode).
//! - `1` — rule violations were found, or an input could not be loaded.
//!
//! ## Crate Policy
//!
//! - Argument parsing and reporting live here; validation lives in
//!   `mdc-schema` and decoding in `mdc-core`.
//! - Reports go to stdout, diagnostics to stderr through `tracing`.

pub mod report;
pub mod validate;
