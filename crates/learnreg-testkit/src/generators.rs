//! Proptest generators for property-based testing.
//!
//! Generated documents are always signable: numbers directly under a map
//! key are integers, while lists may hold floats since those are dropped.

use proptest::prelude::*;

use learnreg_core::{Document, Value};

/// Generate a field name.
pub fn key() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,11}".prop_map(String::from)
}

/// Generate string content, including non-ASCII text.
pub fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,24}".prop_map(String::from),
        "\\PC{0,12}".prop_map(String::from),
    ]
}

/// Generate a scalar that may appear under a map key.
pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        text().prop_map(Value::from),
    ]
}

/// Generate a scalar that may appear inside a list.
pub fn list_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        scalar(),
        (-1.0e9f64..1.0e9f64).prop_map(Value::from),
    ]
}

/// Generate a value nested up to `depth` levels.
pub fn value(depth: u32) -> impl Strategy<Value = Value> {
    scalar().prop_recursive(depth, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(prop_oneof![inner.clone(), list_scalar()], 0..6)
                .prop_map(Value::List),
            prop::collection::vec((key(), inner), 0..6)
                .prop_map(|fields| Value::Map(fields.into_iter().collect())),
        ]
    })
}

/// Generate a document.
pub fn document() -> impl Strategy<Value = Document> {
    prop::collection::vec((key(), value(3)), 0..8)
        .prop_map(|fields| fields.into_iter().collect())
}

/// A signable document for `any::<SignableDocument>()`.
#[derive(Debug, Clone)]
pub struct SignableDocument(pub Document);

impl Arbitrary for SignableDocument {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        document().prop_map(SignableDocument).boxed()
    }
}

/// The same document with key order reversed at every level.
pub fn reverse_key_order(doc: &Document) -> Document {
    let mut fields: Vec<(String, Value)> = doc
        .iter()
        .map(|(k, v)| (k.to_owned(), reverse_value(v)))
        .collect();
    fields.reverse();
    fields.into_iter().collect()
}

fn reverse_value(value: &Value) -> Value {
    match value {
        Value::Map(doc) => Value::Map(reverse_key_order(doc)),
        Value::List(items) => Value::List(items.iter().map(reverse_value).collect()),
        other => other.clone(),
    }
}

/// The same document with `n` appended to every list, at every level.
pub fn append_number_to_lists(doc: &Document, n: i64) -> Document {
    doc.iter()
        .map(|(k, v)| (k.to_owned(), append_number(v, n)))
        .collect()
}

fn append_number(value: &Value, n: i64) -> Value {
    match value {
        Value::Map(doc) => Value::Map(append_number_to_lists(doc, n)),
        Value::List(items) => {
            let mut items: Vec<Value> = items.iter().map(|v| append_number(v, n)).collect();
            items.push(Value::from(n));
            Value::List(items)
        }
        other => other.clone(),
    }
}
