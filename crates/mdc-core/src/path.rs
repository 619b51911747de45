//! # Dotted Paths
//!
//! A [`DocPath`] addresses a node in a [`Value`] tree by mapping keys,
//! e.g. `domain.entities`. Paths never index into sequences: per-element
//! checks walk lists explicitly and only use [`DocPath::element`] to name
//! the element in diagnostics.
//!
//! Constitutions may write list-valued field patterns with a trailing
//! `[*]` marker (`performance.metricsTable[*]`). [`DocPath::from_pattern`]
//! strips the marker so the remaining path resolves to the list itself.

use std::fmt;

use crate::value::Value;

/// Marker for "every element of the list at this path".
pub const LIST_WILDCARD: &str = "[*]";

/// An immutable dot-separated path into a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocPath {
    raw: String,
    segments: Vec<String>,
}

impl DocPath {
    /// Build a path from its dotted text form.
    ///
    /// Segments are taken verbatim: `a..b` has an empty middle segment and
    /// only resolves if the document really has an empty key there.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = raw.split('.').map(str::to_string).collect();
        Self { raw, segments }
    }

    /// Build a path from a field pattern, removing every [`LIST_WILDCARD`].
    pub fn from_pattern(pattern: &str) -> Self {
        Self::new(pattern.replace(LIST_WILDCARD, ""))
    }

    /// The dotted text form.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The key segments in traversal order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Display path for the element at `index` of the list at this path,
    /// e.g. `performance.metricsTable[0]`.
    pub fn element(&self, index: usize) -> String {
        format!("{}[{index}]", self.raw)
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for DocPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Resolve `path` against `root`.
///
/// Each segment must name a key of the current mapping. If the current
/// node is not a mapping, or the key is absent, resolution stops and
/// returns `None`. A missing path is an ordinary outcome, never an error.
pub fn resolve<'a>(root: &'a Value, path: &DocPath) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.segments() {
        current = match current {
            Value::Mapping(map) => map.get(segment.as_str())?,
            Value::Sequence(_) | Value::Scalar(_) => return None,
        };
    }
    Some(current)
}

/// True if `path` resolves in `root`, whatever the value there (including null).
pub fn exists(root: &Value, path: &DocPath) -> bool {
    resolve(root, path).is_some()
}
