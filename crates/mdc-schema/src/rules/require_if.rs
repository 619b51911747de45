//! `strict.requireIf`: paths required only when a condition holds.
//!
//! Conditions use a one-operator grammar:
//!
//! ```text
//! $.mgiContract.docType == 'mdc-constitution'
//! ```
//!
//! The left side is a dotted path (the `$.` prefix is optional), the right
//! side a literal (surrounding quotes are dropped). A condition holds when
//! the path resolves and the canonical text of the value equals the
//! literal, so `flag == true` matches a YAML boolean `true` as well as the
//! string `"true"`.

use std::str::FromStr;

use mdc_core::{exists, resolve, DocPath, Value};

use super::{entry, string_list, RuleEvaluator};
use crate::error::SchemaError;
use crate::result::{RuleId, ValidationError};

const ROOT_PREFIX: &str = "$.";

/// A parsed `<path> == <literal>` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    path: DocPath,
    literal: String,
}

impl Condition {
    /// Parse a `when` clause.
    ///
    /// # Errors
    ///
    /// [`SchemaError::MalformedCondition`] if the clause has no `==`.
    pub fn parse(when: &str) -> Result<Self, SchemaError> {
        let (lhs, rhs) = when
            .split_once("==")
            .ok_or_else(|| SchemaError::MalformedCondition {
                when: when.to_string(),
            })?;

        let lhs = lhs.trim();
        let path = lhs.strip_prefix(ROOT_PREFIX).unwrap_or(lhs);
        let literal = rhs.trim().trim_matches(|c: char| c == '\'' || c == '"');

        Ok(Self {
            path: DocPath::new(path),
            literal: literal.to_string(),
        })
    }

    /// Path whose value is tested.
    pub fn path(&self) -> &DocPath {
        &self.path
    }

    /// Literal the value is compared against.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// True if the path resolves to a value whose canonical text equals the literal.
    pub fn holds(&self, document: &Value) -> bool {
        resolve(document, &self.path)
            .map(|value| value.canonical_string() == self.literal)
            .unwrap_or(false)
    }
}

impl FromStr for Condition {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One `requireIf` entry: a condition and the paths it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalRule {
    when: String,
    condition: Condition,
    paths: Vec<DocPath>,
}

impl ConditionalRule {
    /// Parse `when` and build the rule.
    ///
    /// # Errors
    ///
    /// As [`Condition::parse`].
    pub fn new(when: impl Into<String>, paths: Vec<DocPath>) -> Result<Self, SchemaError> {
        let when = when.into();
        let condition = Condition::parse(&when)?;
        Ok(Self {
            when,
            condition,
            paths,
        })
    }

    /// The clause as written in the constitution.
    pub fn when(&self) -> &str {
        &self.when
    }

    /// The parsed clause.
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Paths required while the condition holds.
    pub fn paths(&self) -> &[DocPath] {
        &self.paths
    }

    fn evaluate(&self, document: &Value, findings: &mut Vec<ValidationError>) {
        if !self.condition.holds(document) {
            return;
        }
        tracing::debug!(when = %self.when, "condition satisfied");

        for path in &self.paths {
            if !exists(document, path) {
                findings.push(ValidationError::new(
                    RuleId::RequireIf,
                    path.as_str(),
                    format!("field required by condition '{}'", self.when),
                ));
            }
        }
    }
}

/// All `requireIf` rules, in constitution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalRequirements {
    rules: Vec<ConditionalRule>,
}

impl ConditionalRequirements {
    /// Build from already-constructed rules.
    pub fn new(rules: Vec<ConditionalRule>) -> Self {
        Self { rules }
    }

    /// Compile the `requireIf` entry of a profile. `None` yields no rules.
    ///
    /// Each entry must be a mapping with a string `when`; `paths` may be
    /// omitted.
    pub fn compile(value: Option<&Value>, location: &str) -> Result<Self, SchemaError> {
        let Some(value) = value else {
            return Ok(Self::default());
        };
        let items = value.as_sequence().ok_or_else(|| SchemaError::InvalidShape {
            location: location.to_string(),
            expected: "a list of conditional rules",
            found: value.kind(),
        })?;

        let rules = items
            .iter()
            .enumerate()
            .map(|(i, item)| compile_rule(item, &format!("{location}[{i}]")))
            .collect::<Result<Vec<_>, SchemaError>>()?;
        Ok(Self::new(rules))
    }

    /// The compiled rules.
    pub fn rules(&self) -> &[ConditionalRule] {
        &self.rules
    }
}

fn compile_rule(item: &Value, location: &str) -> Result<ConditionalRule, SchemaError> {
    if !item.is_mapping() {
        return Err(SchemaError::InvalidShape {
            location: location.to_string(),
            expected: "a mapping with `when` and `paths`",
            found: item.kind(),
        });
    }

    let when_location = format!("{location}.when");
    let when = match entry(item, "when") {
        Some(value) => value.as_str().ok_or_else(|| SchemaError::InvalidShape {
            location: when_location.clone(),
            expected: "a condition string",
            found: value.kind(),
        })?,
        None => {
            return Err(SchemaError::InvalidShape {
                location: when_location,
                expected: "a condition string",
                found: "nothing",
            })
        }
    };

    let paths = match entry(item, "paths") {
        Some(value) => string_list(value, &format!("{location}.paths"), "a list of paths")?,
        None => Vec::new(),
    };

    ConditionalRule::new(when, paths.iter().map(|p| DocPath::new(p.as_str())).collect())
}

impl RuleEvaluator for ConditionalRequirements {
    fn rule_id(&self) -> RuleId {
        RuleId::RequireIf
    }

    fn evaluate(&self, document: &Value, findings: &mut Vec<ValidationError>) {
        for rule in &self.rules {
            rule.evaluate(document, findings);
        }
    }
}
