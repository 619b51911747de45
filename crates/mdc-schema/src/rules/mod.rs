//! # Rule Evaluators
//!
//! The strict profile is made of three independent rule sets. Each one is
//! compiled from the constitution once and then evaluated against any
//! number of documents through the [`RuleEvaluator`] trait.
//!
//! | Rule set                    | Constitution key | Rule id                |
//! |-----------------------------|------------------|------------------------|
//! | [`RequiredPaths`]           | `required`       | `strict.required`      |
//! | [`RequiredListFields`]      | `requireFields`  | `strict.requireFields` |
//! | [`ConditionalRequirements`] | `requireIf`      | `strict.requireIf`     |
//!
//! Evaluators only read the document and append findings; none of them
//! stops early after a violation.

use std::fmt;

use mdc_core::Value;

use crate::error::SchemaError;
use crate::result::{RuleId, ValidationError};

mod require_fields;
mod require_if;
mod required;

pub use require_fields::{ListFieldRule, RequiredListFields};
pub use require_if::{Condition, ConditionalRequirements, ConditionalRule};
pub use required::RequiredPaths;

/// A compiled rule set that checks documents.
pub trait RuleEvaluator: Send + Sync + fmt::Debug {
    /// Identifier attached to every finding this evaluator produces.
    fn rule_id(&self) -> RuleId;

    /// Append findings for `document` to `findings`, in rule order.
    fn evaluate(&self, document: &Value, findings: &mut Vec<ValidationError>);
}

/// Look up `key` in a profile mapping. Null counts as absent.
pub(crate) fn entry<'a>(parent: &'a Value, key: &str) -> Option<&'a Value> {
    match parent.get(key) {
        Some(Value::Scalar(mdc_core::Scalar::Null)) | None => None,
        Some(value) => Some(value),
    }
}

/// Read a list of strings, reporting the first entry that is not a string.
pub(crate) fn string_list(
    value: &Value,
    location: &str,
    expected: &'static str,
) -> Result<Vec<String>, SchemaError> {
    let items = value.as_sequence().ok_or_else(|| SchemaError::InvalidShape {
        location: location.to_string(),
        expected,
        found: value.kind(),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| SchemaError::InvalidShape {
                    location: format!("{location}[{i}]"),
                    expected: "a string",
                    found: item.kind(),
                })
        })
        .collect()
}
