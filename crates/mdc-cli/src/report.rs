//! # Report Rendering
//!
//! Formats a [`ValidationResult`] for the console. The text layout prints
//! one line per finding as `[rule_id] path 'path': message`; the JSON
//! layout serializes the result as `{"valid": .., "errors": [..]}`.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use mdc_schema::ValidationResult;

/// Report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Render `result` for the document at `target`.
pub fn render(result: &ValidationResult, target: &Path, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, target)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("failed to serialize validation result")
        }
    }
}

fn render_text(result: &ValidationResult, target: &Path) -> String {
    let mut out = format!("MDC validation: {}\n", target.display());
    if result.is_valid() {
        out.push_str("PASS: all rules satisfied\n");
        return out;
    }

    out.push_str(&format!("FAIL: {} error(s) found\n", result.len()));
    for error in result.errors() {
        out.push_str(&format!("  - {error}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdc_schema::{RuleId, ValidationError};

    fn failing() -> ValidationResult {
        ValidationResult::from_errors(vec![
            ValidationError::new(RuleId::Required, "domain.entities", "required field missing"),
            ValidationError::new(
                RuleId::RequireFields,
                "performance.metricsTable[0]",
                "required key 'budget_ms' missing",
            ),
        ])
    }

    #[test]
    fn text_pass() {
        let out = render(&ValidationResult::pass(), Path::new("a.mdc"), OutputFormat::Text).unwrap();
        assert_eq!(out, "MDC validation: a.mdc\nPASS: all rules satisfied\n");
    }

    #[test]
    fn text_fail_lists_each_finding() {
        let out = render(&failing(), Path::new("a.mdc"), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "FAIL: 2 error(s) found");
        assert_eq!(
            lines[2],
            "  - [strict.required] path 'domain.entities': required field missing"
        );
        assert_eq!(
            lines[3],
            "  - [strict.requireFields] path 'performance.metricsTable[0]': required key 'budget_ms' missing"
        );
    }

    #[test]
    fn json_report_is_machine_readable() {
        let out = render(&failing(), Path::new("a.mdc"), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["valid"], false);
        assert_eq!(parsed["errors"].as_array().map(Vec::len), Some(2));
        assert_eq!(parsed["errors"][1]["rule_id"], "strict.requireFields");
    }
}
