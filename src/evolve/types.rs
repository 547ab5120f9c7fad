//! Core data types: configuration documents, field values, and scored
//! candidates.
//!
//! A [`Document`] is an ordered map from setting name to [`Value`]. The value
//! representation is closed: every mutation rule and the unknown-field
//! fallback pattern-match on it instead of inspecting types at runtime.

use indexmap::IndexMap;
use std::fmt;

/// An ordered style configuration document.
///
/// Field order is preserved through mutation, so a mutated document
/// serializes back in the same layout as its parent.
pub type Document = IndexMap<String, Value>;

/// A single setting value.
///
/// There is no separate enumerated variant. Style names (e.g. `Attach`,
/// `Allman`) are plain [`Value::Str`], and the allowed set belongs to the
/// field's [`Rule::Choice`](super::rules::Rule::Choice): the same string is a
/// style name under `BreakBeforeBraces` and free text under `CommentPragmas`,
/// and YAML or JSON loaders produce plain strings either way.
///
/// With the `serde` feature the enum is untagged, so YAML or JSON settings
/// deserialize directly into it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// An integer setting (widths, offsets, penalties).
    Int(i64),
    /// A string: style name, regex, or free-form text.
    Str(String),
    /// A nested document (e.g. `BraceWrapping`).
    Map(Document),
    /// A sequence of nested documents (`IncludeCategories`) or of plain
    /// strings (`ForEachMacros`).
    Seq(Vec<Value>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::Map(_) => "map",
            Value::Seq(_) => "sequence",
        }
    }

    /// Returns the integer if this is [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice if this is [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Map(doc) => {
                f.write_str("{")?;
                for (i, (key, value)) in doc.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Map(doc)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

/// Marker trait for fitness scores.
///
/// Lower is better (minimization). Built-in implementations exist for
/// `f64`, `f32`, `u64` and `usize`, the latter two covering scores such as
/// "number of lines changed by the formatter".
pub trait Fitness: PartialOrd + Copy + Send + Sync + fmt::Debug + 'static {
    /// Converts the score to `f64` for logging.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for u64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for usize {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A configuration document paired with the score the outer loop assigned
/// to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCandidate<F: Fitness = f64> {
    /// Fitness score. Lower is better.
    pub score: F,
    /// The scored document.
    pub document: Document,
}

impl<F: Fitness> ScoredCandidate<F> {
    /// Pairs a score with a document.
    pub fn new(score: F, document: Document) -> Self {
        Self { score, document }
    }
}

impl<F: Fitness> From<(F, Document)> for ScoredCandidate<F> {
    fn from((score, document): (F, Document)) -> Self {
        Self { score, document }
    }
}
