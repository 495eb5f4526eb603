//! Submission metadata shared by every envelope variant.

use learnreg_core::{Document, Value};

/// Who submits a document, under which terms, and how it is tagged.
///
/// Setters trim their input and treat blank values as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvelopeMeta {
    pub(crate) submitter: Option<String>,
    pub(crate) submitter_type: Option<String>,
    pub(crate) submission_tos: Option<String>,
    pub(crate) submission_attribution: Option<String>,
    pub(crate) signer: Option<String>,
    pub(crate) curator: Option<String>,
    pub(crate) owner: Option<String>,
    pub(crate) submitter_ttl: Option<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) payload_schema_locator: Option<String>,
}

impl EnvelopeMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitter(mut self, submitter: impl AsRef<str>) -> Self {
        self.submitter = clean(submitter);
        self
    }

    /// Kind of submitter, e.g. `agent`, `user` or `anonymous`.
    pub fn submitter_type(mut self, submitter_type: impl AsRef<str>) -> Self {
        self.submitter_type = clean(submitter_type);
        self
    }

    /// URL of the terms of service the document is submitted under.
    pub fn submission_tos(mut self, tos: impl AsRef<str>) -> Self {
        self.submission_tos = clean(tos);
        self
    }

    pub fn submission_attribution(mut self, attribution: impl AsRef<str>) -> Self {
        self.submission_attribution = clean(attribution);
        self
    }

    pub fn signer(mut self, signer: impl AsRef<str>) -> Self {
        self.signer = clean(signer);
        self
    }

    pub fn curator(mut self, curator: impl AsRef<str>) -> Self {
        self.curator = clean(curator);
        self
    }

    pub fn owner(mut self, owner: impl AsRef<str>) -> Self {
        self.owner = clean(owner);
        self
    }

    /// Submitter time-to-live, as an ISO 8601 timestamp.
    pub fn submitter_ttl(mut self, ttl: impl AsRef<str>) -> Self {
        self.submitter_ttl = clean(ttl);
        self
    }

    /// Set the `keys` tags. Duplicates are dropped, keeping the first.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags.clear();
        for tag in tags {
            self.push_tag(tag);
        }
        self
    }

    pub fn tag(mut self, tag: impl AsRef<str>) -> Self {
        self.push_tag(tag);
        self
    }

    pub fn payload_schema_locator(mut self, locator: impl AsRef<str>) -> Self {
        self.payload_schema_locator = clean(locator);
        self
    }

    fn push_tag(&mut self, tag: impl AsRef<str>) {
        if let Some(tag) = clean(tag) {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    /// The `identity` sub-document.
    pub(crate) fn identity(&self) -> Document {
        let mut doc = Document::new();
        put(&mut doc, "submitter_type", &self.submitter_type);
        put(&mut doc, "submitter", &self.submitter);
        put(&mut doc, "curator", &self.curator);
        put(&mut doc, "owner", &self.owner);
        put(&mut doc, "signer", &self.signer);
        doc
    }

    /// The `TOS` sub-document.
    pub(crate) fn terms(&self) -> Document {
        let mut doc = Document::new();
        put(&mut doc, "submission_TOS", &self.submission_tos);
        put(&mut doc, "submission_attribution", &self.submission_attribution);
        doc
    }
}

/// Trim, and map blank input to `None`.
pub(crate) fn clean(value: impl AsRef<str>) -> Option<String> {
    let trimmed = value.as_ref().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Insert an optional string field.
pub(crate) fn put(doc: &mut Document, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        doc.insert(key, value.as_str());
    }
}

/// Insert a value unless it is an empty list or map.
pub(crate) fn put_value(doc: &mut Document, key: &str, value: Value) {
    if !value.is_empty_container() {
        doc.insert(key, value);
    }
}
