//! # Validate Command
//!
//! Loads the document under test and the constitution, compiles the
//! constitution's strict profile, validates, and prints a report.
//!
//! Returns exit code 0 when the document passes and 1 when it has
//! findings. Load and compile failures are returned as errors, which the
//! binary also maps to 1.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mdc_core::load_document;
use mdc_schema::Validator;

use crate::report::{render, OutputFormat};

/// Arguments for `mdc-validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// MDC document to validate.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Constitution whose strict profile is enforced.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Report layout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute a validation run and print its report to stdout.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let (code, report) = validate_to_report(args)?;
    print!("{report}");
    Ok(code)
}

/// Execute a validation run, returning the exit code and rendered report.
pub fn validate_to_report(args: &ValidateArgs) -> Result<(u8, String)> {
    let schema = load_document(&args.schema)
        .with_context(|| format!("failed to load constitution {}", args.schema.display()))?;
    let validator = Validator::new(&schema)
        .with_context(|| format!("invalid strict profile in {}", args.schema.display()))?;

    tracing::info!(
        rules = validator.profile().rule_count(),
        "loaded constitution"
    );

    let document = load_document(&args.target)
        .with_context(|| format!("failed to load document {}", args.target.display()))?;

    let result = validator.validate(&document);
    let report = render(&result, &args.target, args.format)?;

    let code = if result.is_valid() { 0 } else { 1 };
    Ok((code, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const CONSTITUTION: &str = r#"---
validationMode: lenient
validationProfiles:
  strict:
    required: [domain.entities]
    requireFields:
      "performance.metricsTable[*]": [budget_ms]
    requireIf:
      - when: "$.mgiContract.docType == 'mdc-constitution'"
        paths: [mergePolicy.arrayKeyBy]
---
"#;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(target: PathBuf, schema: PathBuf, format: OutputFormat) -> ValidateArgs {
        ValidateArgs {
            target,
            schema,
            format,
        }
    }

    #[test]
    fn passing_document_returns_0() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write(dir.path(), "constitution.md", CONSTITUTION);
        let target = write(
            dir.path(),
            "ok.mdc",
            "```yaml\nvalidationMode: strict\ndomain: {entities: []}\n```\n",
        );

        let (code, report) = validate_to_report(&args(target, schema, OutputFormat::Text)).unwrap();
        assert_eq!(code, 0);
        assert!(report.contains("PASS"));
    }

    #[test]
    fn non_strict_document_returns_0() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write(dir.path(), "constitution.md", CONSTITUTION);
        let target = write(dir.path(), "draft.mdc", "---\nvalidationMode: draft\n---\n");

        let (code, _) = validate_to_report(&args(target, schema, OutputFormat::Text)).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn failing_document_returns_1_with_findings() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write(dir.path(), "constitution.md", CONSTITUTION);
        let target = write(
            dir.path(),
            "bad.mdc",
            "```yaml\nvalidationMode: strict\nmgiContract: {docType: mdc-constitution}\n```\n",
        );

        let (code, report) = validate_to_report(&args(target, schema, OutputFormat::Text)).unwrap();
        assert_eq!(code, 1);
        assert!(report.contains("FAIL: 2 error(s) found"));
        assert!(report.contains("[strict.required] path 'domain.entities'"));
        assert!(report.contains("[strict.requireIf] path 'mergePolicy.arrayKeyBy'"));
    }

    #[test]
    fn json_format_reports_findings() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write(dir.path(), "constitution.md", CONSTITUTION);
        let target = write(
            dir.path(),
            "bad.mdc",
            "```yaml\nvalidationMode: strict\ndomain: {entities: []}\nperformance:\n  metricsTable: [{metric: X}]\n```\n",
        );

        let (code, report) = validate_to_report(&args(target, schema, OutputFormat::Json)).unwrap();
        assert_eq!(code, 1);
        let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(parsed["errors"][0]["path"], "performance.metricsTable[0]");
    }

    #[test]
    fn missing_target_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write(dir.path(), "constitution.md", CONSTITUTION);
        let err = validate_to_report(&args(
            dir.path().join("absent.mdc"),
            schema,
            OutputFormat::Text,
        ))
        .unwrap_err();
        assert!(format!("{err:#}").contains("failed to load document"));
    }

    #[test]
    fn document_without_yaml_block_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write(dir.path(), "constitution.md", CONSTITUTION);
        let target = write(dir.path(), "prose.mdc", "# Only prose here\n");
        let err = validate_to_report(&args(target, schema, OutputFormat::Text)).unwrap_err();
        assert!(format!("{err:#}").contains("no YAML block found"));
    }

    #[test]
    fn malformed_condition_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write(
            dir.path(),
            "constitution.md",
            "---\nvalidationProfiles:\n  strict:\n    requireIf:\n      - when: \"$.docType\"\n---\n",
        );
        let target = write(dir.path(), "ok.mdc", "---\nvalidationMode: strict\n---\n");
        let err = validate_to_report(&args(target, schema, OutputFormat::Text)).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid strict profile"));
        assert!(msg.contains("malformed requireIf condition"));
    }

    #[test]
    fn run_validate_returns_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write(dir.path(), "constitution.md", CONSTITUTION);
        let target = write(dir.path(), "bad.mdc", "---\nvalidationMode: strict\n---\n");
        assert_eq!(run_validate(&args(target, schema, OutputFormat::Text)).unwrap(), 1);
    }
}
