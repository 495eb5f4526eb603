//! Document normalization ahead of canonical encoding.
//!
//! The rules match the Learning Registry signature reference so that digests
//! agree with other nodes:
//!
//! - `null` becomes the string `"null"`
//! - booleans become `"true"` / `"false"`
//! - nested maps and lists are normalized recursively
//! - numbers inside lists are dropped
//! - numbers directly under a map key are kept as numbers
//!
//! The last two rules are asymmetric on purpose: the reference drops list
//! numbers but passes map numbers through, and interoperability depends on
//! doing exactly the same. Key order is preserved here; sorting is the
//! encoder's job.

use serde_json::Number;

use crate::value::{Document, Value};

/// The string a `null` normalizes to.
pub const NULL_LITERAL: &str = "null";

/// A value with the restricted normalized shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedValue {
    String(String),
    /// Only produced for numbers stored directly under a map key.
    Number(Number),
    List(Vec<NormalizedValue>),
    Map(NormalizedDocument),
}

impl From<&str> for NormalizedValue {
    fn from(s: &str) -> Self {
        NormalizedValue::String(s.to_owned())
    }
}

impl From<String> for NormalizedValue {
    fn from(s: String) -> Self {
        NormalizedValue::String(s)
    }
}

impl From<NormalizedDocument> for NormalizedValue {
    fn from(doc: NormalizedDocument) -> Self {
        NormalizedValue::Map(doc)
    }
}

/// An insertion-ordered map of normalized values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedDocument {
    entries: Vec<(String, NormalizedValue)>,
}

impl NormalizedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Callers are responsible for key uniqueness; the
    /// normalizer inherits it from [`Document`].
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<NormalizedValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<NormalizedValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&NormalizedValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NormalizedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Normalize a document.
pub fn normalize_document(doc: &Document) -> NormalizedDocument {
    let mut out = NormalizedDocument {
        entries: Vec::with_capacity(doc.len()),
    };
    for (key, value) in doc.iter() {
        out.push(key, normalize_value(value));
    }
    out
}

/// Normalize a value found directly under a map key.
pub fn normalize_value(value: &Value) -> NormalizedValue {
    match value {
        Value::Null => NormalizedValue::String(NULL_LITERAL.to_owned()),
        Value::Bool(b) => NormalizedValue::String(b.to_string()),
        Value::Number(n) => NormalizedValue::Number(n.clone()),
        Value::String(s) => NormalizedValue::String(s.clone()),
        Value::List(items) => {
            NormalizedValue::List(items.iter().filter_map(normalize_list_item).collect())
        }
        Value::Map(doc) => NormalizedValue::Map(normalize_document(doc)),
    }
}

/// Normalize a value in list position.
///
/// Returns `None` for numbers, which the normalized form drops from lists.
pub fn normalize_list_item(value: &Value) -> Option<NormalizedValue> {
    match value {
        Value::Number(_) => None,
        other => Some(normalize_value(other)),
    }
}
