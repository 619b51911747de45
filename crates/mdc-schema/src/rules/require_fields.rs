//! `strict.requireFields`: keys every element of a list must carry.
//!
//! The constitution maps a list pattern such as `performance.metricsTable[*]`
//! to the keys each element needs. A list that is absent, or a path that
//! holds something other than a list, is skipped: presence is the job of
//! `strict.required`.

use mdc_core::{resolve, DocPath, Value};

use super::{string_list, RuleEvaluator};
use crate::error::SchemaError;
use crate::result::{RuleId, ValidationError};

/// Required keys for the elements of one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFieldRule {
    pattern: String,
    base: DocPath,
    keys: Vec<String>,
}

impl ListFieldRule {
    /// Build a rule from its pattern (wildcard allowed) and required keys.
    pub fn new(pattern: impl Into<String>, keys: Vec<String>) -> Self {
        let pattern = pattern.into();
        let base = DocPath::from_pattern(&pattern);
        Self {
            pattern,
            base,
            keys,
        }
    }

    /// The pattern as written in the constitution.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Path of the list, wildcard removed.
    pub fn base(&self) -> &DocPath {
        &self.base
    }

    /// Keys each element must contain, in constitution order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    fn evaluate(&self, document: &Value, findings: &mut Vec<ValidationError>) {
        let Some(items) = resolve(document, &self.base).and_then(Value::as_sequence) else {
            tracing::debug!(base = %self.base, "no list at path, skipping");
            return;
        };

        for (index, item) in items.iter().enumerate() {
            let element_path = self.base.element(index);
            let Some(fields) = item.as_mapping() else {
                findings.push(ValidationError::new(
                    RuleId::RequireFields,
                    element_path,
                    "element is not an object",
                ));
                continue;
            };

            for key in &self.keys {
                if !fields.contains_key(key.as_str()) {
                    findings.push(ValidationError::new(
                        RuleId::RequireFields,
                        element_path.as_str(),
                        format!("required key '{key}' missing"),
                    ));
                }
            }
        }
    }
}

/// All `requireFields` rules, in constitution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredListFields {
    rules: Vec<ListFieldRule>,
}

impl RequiredListFields {
    /// Build from already-constructed rules.
    pub fn new(rules: Vec<ListFieldRule>) -> Self {
        Self { rules }
    }

    /// Compile the `requireFields` entry of a profile. `None` yields no rules.
    pub fn compile(value: Option<&Value>, location: &str) -> Result<Self, SchemaError> {
        let Some(value) = value else {
            return Ok(Self::default());
        };
        let map = value.as_mapping().ok_or_else(|| SchemaError::InvalidShape {
            location: location.to_string(),
            expected: "a mapping of list patterns to key lists",
            found: value.kind(),
        })?;

        let rules = map
            .iter()
            .map(|(pattern, keys)| {
                let keys = string_list(keys, &format!("{location}.{pattern}"), "a list of keys")?;
                Ok(ListFieldRule::new(pattern.as_str(), keys))
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;
        Ok(Self::new(rules))
    }

    /// The compiled rules.
    pub fn rules(&self) -> &[ListFieldRule] {
        &self.rules
    }
}

impl RuleEvaluator for RequiredListFields {
    fn rule_id(&self) -> RuleId {
        RuleId::RequireFields
    }

    fn evaluate(&self, document: &Value, findings: &mut Vec<ValidationError>) {
        for rule in &self.rules {
            rule.evaluate(document, findings);
        }
    }
}
