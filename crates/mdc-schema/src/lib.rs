//! # mdc-schema — Constitution Validation
//!
//! Checks an MDC document against the `strict` validation profile of a
//! constitution.
//!
//! ## Flow
//!
//! 1. [`Validator::new`] compiles `validationProfiles.strict` from the
//!    constitution into a [`StrictProfile`]. Malformed rules (for example a
//!    `requireIf` condition without `==`) fail here with a [`SchemaError`],
//!    before any document is looked at.
//! 2. [`Validator::validate`] returns immediately with a passing result
//!    unless the document declares `validationMode: strict`.
//! 3. Otherwise the three rule evaluators run in fixed order
//!    (`strict.required`, `strict.requireFields`, `strict.requireIf`) and
//!    their findings are concatenated into a [`ValidationResult`].
//!
//! ## Crate Policy
//!
//! - Validation is pure: no I/O, no printing, no process exit.
//! - Rule violations are data ([`ValidationError`]); only a broken
//!   constitution is an `Err`.
//! - A compiled [`Validator`] is immutable and may be shared across threads.

pub mod error;
pub mod profile;
pub mod result;
pub mod rules;
pub mod validator;

pub use error::SchemaError;
pub use profile::{StrictProfile, PROFILES_KEY, STRICT_PROFILE};
pub use result::{RuleId, ValidationError, ValidationResult};
pub use rules::{
    Condition, ConditionalRequirements, ConditionalRule, ListFieldRule, RequiredListFields,
    RequiredPaths, RuleEvaluator,
};
pub use validator::{validate, Validator, STRICT_MODE, VALIDATION_MODE_KEY};
