//! Envelope variants and the documents they build.
//!
//! Every variant produces a plain [`Document`] through [`build_document`].
//! Signing works on that document alone and never on the variant.

use learnreg_core::{Document, Value};
use tracing::trace;

use crate::error::{EnvelopeError, Result};
use crate::meta::{clean, put, put_value, EnvelopeMeta};

/// Value of `doc_type` for every envelope.
pub const DOC_TYPE: &str = "resource_data";

/// Envelope format version.
pub const DOC_VERSION: &str = "0.51.0";

/// `resource_data_type` of activity envelopes.
pub const PARADATA_DATA_TYPE: &str = "paradata";

/// `payload_schema` of activity envelopes.
pub const PARADATA_SCHEMA: &str = "LR Paradata 1.0";

/// `payload_placement` for payloads carried in `resource_data`.
pub const PLACEMENT_INLINE: &str = "inline";

/// `payload_placement` of delete envelopes.
pub const PLACEMENT_NONE: &str = "none";

/// Resource data given as text, typically XML metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleDocument {
    pub meta: EnvelopeMeta,
    resource_data: String,
    resource_locator: String,
    resource_data_type: Option<String>,
    payload_placement: Option<String>,
    payload_schema: Vec<String>,
}

impl SimpleDocument {
    pub fn new(resource_data: impl AsRef<str>, resource_locator: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            meta: EnvelopeMeta::default(),
            resource_data: clean(resource_data).ok_or(EnvelopeError::NoData)?,
            resource_locator: clean(resource_locator).ok_or(EnvelopeError::NoLocator)?,
            resource_data_type: None,
            payload_placement: None,
            payload_schema: Vec::new(),
        })
    }

    pub fn meta(mut self, meta: EnvelopeMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Set `resource_data_type`, e.g. `metadata`.
    pub fn resource_data_type(mut self, data_type: impl AsRef<str>) -> Self {
        self.resource_data_type = clean(data_type);
        self
    }

    pub fn payload_placement(mut self, placement: impl AsRef<str>) -> Self {
        self.payload_placement = clean(placement);
        self
    }

    pub fn payload_schema<I, S>(mut self, schema: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.payload_schema = schema.into_iter().filter_map(clean).collect();
        self
    }
}

/// Resource data given as a JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDocument {
    pub meta: EnvelopeMeta,
    resource_data: Document,
    resource_locator: String,
    resource_data_type: Option<String>,
    payload_placement: Option<String>,
    payload_schema: Vec<String>,
}

impl JsonDocument {
    pub fn new(resource_data: Document, resource_locator: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            meta: EnvelopeMeta::default(),
            resource_data,
            resource_locator: clean(resource_locator).ok_or(EnvelopeError::NoLocator)?,
            resource_data_type: None,
            payload_placement: None,
            payload_schema: Vec::new(),
        })
    }

    /// Parse the resource data from JSON text, which must hold an object.
    pub fn from_json_str(resource_data: &str, resource_locator: impl AsRef<str>) -> Result<Self> {
        let data = Document::from_json_str(resource_data)
            .map_err(|e| EnvelopeError::InvalidJson(e.to_string()))?;
        Self::new(data, resource_locator)
    }

    pub fn meta(mut self, meta: EnvelopeMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn resource_data_type(mut self, data_type: impl AsRef<str>) -> Self {
        self.resource_data_type = clean(data_type);
        self
    }

    pub fn payload_placement(mut self, placement: impl AsRef<str>) -> Self {
        self.payload_placement = clean(placement);
        self
    }

    pub fn payload_schema<I, S>(mut self, schema: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.payload_schema = schema.into_iter().filter_map(clean).collect();
        self
    }
}

/// A paradata activity statement about a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub meta: EnvelopeMeta,
    resource_locator: String,
    activity: Document,
    related: Vec<Document>,
}

impl Activity {
    pub fn new(resource_locator: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            meta: EnvelopeMeta::default(),
            resource_locator: clean(resource_locator).ok_or(EnvelopeError::NoLocator)?,
            activity: Document::new(),
            related: Vec::new(),
        })
    }

    pub fn meta(mut self, meta: EnvelopeMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Replace the activity body (actor, verb, object, ...).
    pub fn activity(mut self, activity: Document) -> Self {
        self.activity = activity;
        self
    }

    /// Add a related object.
    pub fn related(mut self, related: Document) -> Self {
        self.related.push(related);
        self
    }

    /// The `activity` wrapper placed in `resource_data`.
    fn payload(&self) -> Document {
        let mut activity = self.activity.clone();
        if !self.related.is_empty() {
            activity.insert(
                "related",
                Value::List(self.related.iter().cloned().map(Value::Map).collect()),
            );
        }
        Document::new().with("activity", activity)
    }
}

/// Retraction of previously published documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delete {
    pub meta: EnvelopeMeta,
    replaces: Vec<String>,
}

impl Delete {
    /// Retract the documents with the given ids.
    pub fn new<I, S>(replaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            meta: EnvelopeMeta::default(),
            replaces: replaces.into_iter().filter_map(clean).collect(),
        }
    }

    pub fn meta(mut self, meta: EnvelopeMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn replaces(&self) -> &[String] {
        &self.replaces
    }
}

/// The envelope variants a publisher can submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    SimpleDocument(SimpleDocument),
    JsonDocument(JsonDocument),
    Activity(Activity),
    Delete(Delete),
}

impl Envelope {
    pub fn meta(&self) -> &EnvelopeMeta {
        match self {
            Envelope::SimpleDocument(e) => &e.meta,
            Envelope::JsonDocument(e) => &e.meta,
            Envelope::Activity(e) => &e.meta,
            Envelope::Delete(e) => &e.meta,
        }
    }

    /// The document as sent to a node.
    pub fn to_document(&self) -> Result<Document> {
        build_document(self)
    }
}

impl From<SimpleDocument> for Envelope {
    fn from(e: SimpleDocument) -> Self {
        Envelope::SimpleDocument(e)
    }
}

impl From<JsonDocument> for Envelope {
    fn from(e: JsonDocument) -> Self {
        Envelope::JsonDocument(e)
    }
}

impl From<Activity> for Envelope {
    fn from(e: Activity) -> Self {
        Envelope::Activity(e)
    }
}

impl From<Delete> for Envelope {
    fn from(e: Delete) -> Self {
        Envelope::Delete(e)
    }
}

/// Fields that differ between variants.
struct Body<'a> {
    resource_data_type: Option<String>,
    resource_locator: Option<&'a str>,
    payload_placement: Option<String>,
    payload_schema: Vec<String>,
    resource_data: String,
    replaces: &'a [String],
}

/// Build the sendable document for an envelope.
///
/// Fields appear in the order registry nodes expect. Absent values, empty
/// lists and empty maps are left out.
pub fn build_document(envelope: &Envelope) -> Result<Document> {
    let body = match envelope {
        Envelope::SimpleDocument(e) => Body {
            resource_data_type: e.resource_data_type.clone(),
            resource_locator: Some(e.resource_locator.as_str()),
            payload_placement: e.payload_placement.clone(),
            payload_schema: e.payload_schema.clone(),
            resource_data: e.resource_data.clone(),
            replaces: &[],
        },
        Envelope::JsonDocument(e) => Body {
            resource_data_type: e.resource_data_type.clone(),
            resource_locator: Some(e.resource_locator.as_str()),
            payload_placement: e.payload_placement.clone(),
            payload_schema: e.payload_schema.clone(),
            resource_data: encode_json(&e.resource_data)?,
            replaces: &[],
        },
        Envelope::Activity(e) => Body {
            resource_data_type: Some(PARADATA_DATA_TYPE.to_owned()),
            resource_locator: Some(e.resource_locator.as_str()),
            payload_placement: Some(PLACEMENT_INLINE.to_owned()),
            payload_schema: vec![PARADATA_SCHEMA.to_owned()],
            resource_data: encode_json(&e.payload())?,
            replaces: &[],
        },
        Envelope::Delete(e) => Body {
            resource_data_type: None,
            resource_locator: None,
            payload_placement: Some(PLACEMENT_NONE.to_owned()),
            payload_schema: Vec::new(),
            resource_data: encode_json(&Document::new())?,
            replaces: &e.replaces,
        },
    };
    let meta = envelope.meta();

    let mut doc = Document::with_capacity(16);
    doc.insert("doc_type", DOC_TYPE);
    doc.insert("doc_version", DOC_VERSION);
    doc.insert("active", true);
    put(&mut doc, "resource_data_type", &body.resource_data_type);
    put_value(&mut doc, "identity", Value::Map(meta.identity()));
    put(&mut doc, "submitter_TTL", &meta.submitter_ttl);
    put_value(&mut doc, "TOS", Value::Map(meta.terms()));
    if let Some(locator) = body.resource_locator {
        doc.insert("resource_locator", locator);
    }
    put(&mut doc, "payload_placement", &body.payload_placement);
    put_value(&mut doc, "payload_schema", string_list(&body.payload_schema));
    put(&mut doc, "payload_schema_locator", &meta.payload_schema_locator);
    put_value(&mut doc, "keys", string_list(&meta.tags));
    doc.insert("resource_data", body.resource_data);
    put_value(&mut doc, "replaces", string_list(body.replaces));

    trace!(fields = doc.len(), "built envelope document");
    Ok(doc)
}

fn string_list(items: &[String]) -> Value {
    Value::List(items.iter().map(|s| Value::from(s.as_str())).collect())
}

/// Structured resource data travels as a JSON string.
fn encode_json(data: &Document) -> Result<String> {
    data.to_json_string()
        .map_err(|e| EnvelopeError::InvalidJson(e.to_string()))
}
