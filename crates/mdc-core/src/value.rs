//! # Value Model
//!
//! The nested representation shared by MDC documents and constitutions.
//!
//! A [`Value`] is exactly one of a mapping, an ordered sequence, or a
//! scalar. Every consumer matches exhaustively over these three variants,
//! so a list can never be mistaken for a mapping during path traversal.
//!
//! ## Canonical text
//!
//! Conditional rules compare a resolved value against a literal taken
//! from the constitution. That comparison is textual, so every value has a
//! single canonical string form ([`Value::canonical_string`]):
//!
//! - strings render verbatim,
//! - booleans render as `true` / `false`, null as `null`,
//! - integers in decimal, floats in shortest round-trip form with a
//!   trailing `.0` for integral values,
//! - sequences and mappings in YAML flow style (`[a, b]`, `{k: v}`).

use std::fmt;

use indexmap::IndexMap;

use crate::error::DuplicateKey;

/// A decoded node of an MDC document or constitution.
///
/// Mapping keys are unique. Key order follows the source text; it only
/// matters where a rule set iterates a mapping (per-list field rules are
/// evaluated in declaration order).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Key/value pairs with string keys.
    Mapping(IndexMap<String, Value>),
    /// An ordered, index-addressable list.
    Sequence(Vec<Value>),
    /// A leaf value.
    Scalar(Scalar),
}

/// A leaf value in the [`Value`] tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// YAML `null`, `~`, or an empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer that fits in `i64`.
    Integer(i64),
    /// Any other number.
    Float(f64),
    /// A string.
    String(String),
}

impl Value {
    /// Shorthand for a string scalar.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Scalar(Scalar::String(s.into()))
    }

    /// Shorthand for the null scalar.
    pub fn null() -> Self {
        Value::Scalar(Scalar::Null)
    }

    /// Returns the entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the elements if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the string content if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// True for [`Value::Mapping`].
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// True for [`Value::Sequence`].
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Look up a direct child of a mapping. Non-mappings have no children.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Mapping(_) => "mapping",
            Value::Sequence(_) => "sequence",
            Value::Scalar(Scalar::Null) => "null",
            Value::Scalar(Scalar::Bool(_)) => "boolean",
            Value::Scalar(Scalar::Integer(_)) | Value::Scalar(Scalar::Float(_)) => "number",
            Value::Scalar(Scalar::String(_)) => "string",
        }
    }

    /// The canonical textual form of this value.
    pub fn canonical_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Value::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Integer(n) => write!(f, "{n}"),
            Scalar::Float(x) => fmt_float(*x, f),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        f.write_str(".nan")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { ".inf" } else { "-.inf" })
    } else if x.fract() == 0.0 && x.abs() < 1e16 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}

impl TryFrom<serde_yaml::Value> for Value {
    type Error = DuplicateKey;

    /// Convert a parsed YAML tree.
    ///
    /// Non-string keys are stored under their canonical text (`1`, `true`).
    /// A mapping where two keys end up with the same text (`1` and `'1'`)
    /// is rejected rather than letting one entry shadow the other.
    fn try_from(value: serde_yaml::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_yaml::Value::Null => Value::Scalar(Scalar::Null),
            serde_yaml::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            serde_yaml::Value::Number(n) => Value::Scalar(number_scalar(&n)),
            serde_yaml::Value::String(s) => Value::Scalar(Scalar::String(s)),
            serde_yaml::Value::Sequence(items) => Value::Sequence(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_yaml::Value::Mapping(map) => {
                let mut entries = IndexMap::with_capacity(map.len());
                for (k, v) in map {
                    let key = Value::try_from(k)?.canonical_string();
                    if entries.contains_key(&key) {
                        return Err(DuplicateKey { key });
                    }
                    entries.insert(key, Value::try_from(v)?);
                }
                Value::Mapping(entries)
            }
            // Tags carry no meaning for conformance checks.
            serde_yaml::Value::Tagged(tagged) => {
                let tagged = *tagged;
                Value::try_from(tagged.value)?
            }
        })
    }
}

fn number_scalar(n: &serde_yaml::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Integer(i)
    } else if let Some(x) = n.as_f64() {
        Scalar::Float(x)
    } else {
        Scalar::String(n.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Integer(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(Scalar::Float(x))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().collect())
    }
}
