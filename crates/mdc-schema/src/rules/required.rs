//! `strict.required`: paths that must exist in every strict document.

use mdc_core::{exists, DocPath, Value};

use super::{string_list, RuleEvaluator};
use crate::error::SchemaError;
use crate::result::{RuleId, ValidationError};

/// Paths that must resolve in the document, in constitution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredPaths {
    paths: Vec<DocPath>,
}

impl RequiredPaths {
    /// Build from already-parsed paths.
    pub fn new(paths: impl IntoIterator<Item = DocPath>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
        }
    }

    /// Compile the `required` entry of a profile. `None` yields no rules.
    pub fn compile(value: Option<&Value>, location: &str) -> Result<Self, SchemaError> {
        let Some(value) = value else {
            return Ok(Self::default());
        };
        let paths = string_list(value, location, "a list of paths")?;
        Ok(Self::new(paths.iter().map(|p| DocPath::new(p.as_str()))))
    }

    /// The required paths.
    pub fn paths(&self) -> &[DocPath] {
        &self.paths
    }
}

impl RuleEvaluator for RequiredPaths {
    fn rule_id(&self) -> RuleId {
        RuleId::Required
    }

    fn evaluate(&self, document: &Value, findings: &mut Vec<ValidationError>) {
        for path in &self.paths {
            if !exists(document, path) {
                tracing::debug!(path = %path, "required path missing");
                findings.push(ValidationError::new(
                    RuleId::Required,
                    path.as_str(),
                    "required field missing",
                ));
            }
        }
    }
}
