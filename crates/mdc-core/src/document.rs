//! # MDC Document Decoding
//!
//! MDC files are Markdown with an embedded YAML block. Two layouts are
//! accepted, checked in this order:
//!
//! 1. a fenced block opened with ```` ```yaml ```` and closed with ```` ``` ````,
//! 2. a front-matter header delimited by `---` lines.
//!
//! The first match wins. The extracted text is parsed with `serde_yaml`,
//! converted into a [`Value`], and must be a mapping at the top level.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DocumentError;
use crate::value::Value;

static FENCED_YAML: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```yaml\s*\n(.*?)\n```").expect("fenced block pattern is valid")
});

static FRONT_MATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)^---\s*\n(.*?)\n---").expect("front matter pattern is valid")
});

/// Locate the YAML block in `text`.
///
/// # Errors
///
/// Returns [`DocumentError::BlockNotFound`] if neither layout is present.
pub fn extract_yaml_block<'a>(text: &'a str, source_name: &str) -> Result<&'a str, DocumentError> {
    FENCED_YAML
        .captures(text)
        .or_else(|| FRONT_MATTER.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| DocumentError::BlockNotFound {
            source_name: source_name.to_string(),
        })
}

/// Extract and decode the YAML block of an MDC document.
///
/// `source_name` only appears in error messages.
///
/// # Errors
///
/// [`DocumentError::BlockNotFound`], [`DocumentError::Decode`] (also for
/// mapping keys that collide once stringified, see [`DuplicateKey`]), or
/// [`DocumentError::NotAMapping`] (an empty block decodes to null and is
/// rejected the same way).
///
/// [`DuplicateKey`]: crate::error::DuplicateKey
pub fn decode_document(text: &str, source_name: &str) -> Result<Value, DocumentError> {
    let block = extract_yaml_block(text, source_name)?;
    let raw: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|e| DocumentError::Decode {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;

    let value = Value::try_from(raw).map_err(|e| DocumentError::Decode {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })?;
    if !value.is_mapping() {
        return Err(DocumentError::NotAMapping {
            source_name: source_name.to_string(),
            found: value.kind(),
        });
    }

    tracing::debug!(
        source = source_name,
        top_level_keys = value.as_mapping().map_or(0, |m| m.len()),
        "decoded MDC document"
    );
    Ok(value)
}

/// Read an MDC file from disk and decode its YAML block.
///
/// # Errors
///
/// [`DocumentError::Io`] if the file cannot be read as UTF-8, otherwise
/// as [`decode_document`].
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let shown = path.display().to_string();
    tracing::info!(path = %shown, "loading MDC document");

    let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
        path: shown.clone(),
        source: e,
    })?;
    decode_document(&content, &shown)
}
