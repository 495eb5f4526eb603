//! The signable view of a document, and attaching signatures to it.

use learnreg_core::Document;
use learnreg_sign::SignatureBlock;

/// Field holding the signature block of a sendable document.
pub const DIGITAL_SIGNATURE_FIELD: &str = "digital_signature";

/// Fields that nodes own or that carry the signature itself. They are
/// never part of what gets signed.
pub const EXCLUDED_FIELDS: [&str; 8] = [
    DIGITAL_SIGNATURE_FIELD,
    "publishing_node",
    "update_timestamp",
    "node_timestamp",
    "create_timestamp",
    "doc_ID",
    "_id",
    "_rev",
];

/// Strip node-owned fields from a document.
///
/// Works on documents built locally as well as ones fetched back from a
/// node, so a published document can be re-verified.
pub fn signable_document(doc: &Document) -> Document {
    doc.iter()
        .filter(|(key, _)| !EXCLUDED_FIELDS.contains(key))
        .map(|(key, value)| (key, value.clone()))
        .collect()
}

/// Add `digital_signature` to a sendable document.
pub fn attach_signature(mut doc: Document, block: &SignatureBlock) -> Document {
    doc.insert(DIGITAL_SIGNATURE_FIELD, block.to_document());
    doc
}

/// Read back the signature block of a sendable document.
pub fn signature_of(doc: &Document) -> Option<SignatureBlock> {
    doc.get(DIGITAL_SIGNATURE_FIELD)
        .and_then(SignatureBlock::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnreg_core::canonical_digest;

    fn published() -> Document {
        Document::new()
            .with("_id", "abc")
            .with("_rev", "1-def")
            .with("doc_type", "resource_data")
            .with("doc_ID", "abc")
            .with("node_timestamp", "2024-01-01T00:00:00Z")
            .with("create_timestamp", "2024-01-01T00:00:00Z")
            .with("update_timestamp", "2024-01-01T00:00:00Z")
            .with("publishing_node", "node-1")
            .with("resource_locator", "http://example.org/x")
    }

    #[test]
    fn test_excluded_fields_removed_in_order() {
        let doc = signable_document(&published());
        let keys: Vec<_> = doc.keys().collect();
        assert_eq!(keys, vec!["doc_type", "resource_locator"]);
    }

    #[test]
    fn test_attach_and_read_back() {
        let block = SignatureBlock::new("http://keys.example.org/k", "ARMOR");
        let doc = attach_signature(Document::new().with("doc_type", "resource_data"), &block);

        assert_eq!(doc.keys().last(), Some(DIGITAL_SIGNATURE_FIELD));
        assert_eq!(signature_of(&doc), Some(block));
    }

    #[test]
    fn test_signature_does_not_change_digest() {
        let doc = Document::new().with("doc_type", "resource_data");
        let signed = attach_signature(
            doc.clone(),
            &SignatureBlock::new("http://keys.example.org/k", "ARMOR"),
        );
        assert_eq!(
            canonical_digest(&signable_document(&signed)).unwrap(),
            canonical_digest(&doc).unwrap()
        );
    }
}
