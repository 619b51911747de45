//! # Validation Findings
//!
//! [`ValidationError`] is one rule violation. [`ValidationResult`] is the
//! ordered list of violations from a single run, together with the pass/fail
//! flag derived from it. Both are plain data owned by the caller.

use std::fmt;

use serde::Serialize;

/// Which evaluator produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleId {
    /// A path listed under `required` is missing.
    #[serde(rename = "strict.required")]
    Required,
    /// An element of a list governed by `requireFields` is incomplete.
    #[serde(rename = "strict.requireFields")]
    RequireFields,
    /// A path required by a satisfied `requireIf` condition is missing.
    #[serde(rename = "strict.requireIf")]
    RequireIf,
}

impl RuleId {
    /// The identifier as reported, e.g. `strict.required`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::Required => "strict.required",
            RuleId::RequireFields => "strict.requireFields",
            RuleId::RequireIf => "strict.requireIf",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Evaluator that produced the finding.
    pub rule_id: RuleId,
    /// Document path implicated, e.g. `domain.entities` or `performance.metricsTable[0]`.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    /// Create a finding.
    pub fn new(rule_id: RuleId, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] path '{}': {}", self.rule_id, self.path, self.message)
    }
}

/// Outcome of one validation run.
///
/// `valid` is true exactly when `errors` is empty; the only constructor
/// keeps the two in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A passing result with no findings.
    pub fn pass() -> Self {
        Self::from_errors(Vec::new())
    }

    /// Build a result from findings in evaluation order.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// True if no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Findings in evaluation order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consume the result, keeping the findings.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True if there are no findings.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
