//! The canonical pipeline: normalize, bencode, hash.
//!
//! `canonical_digest(doc)` is the value a registry signature is computed
//! over. Its hex form is the plaintext of the clear-signed message.

use crate::bencode::{bencode_document, CanonicalBytes};
use crate::digest::Sha256Digest;
use crate::error::CoreError;
use crate::normalize::normalize_document;
use crate::value::Document;

/// Normalize and bencode a document.
pub fn canonical_bytes(doc: &Document) -> Result<CanonicalBytes, CoreError> {
    let normalized = normalize_document(doc);
    let bytes = bencode_document(&normalized)?;
    tracing::trace!(fields = doc.len(), encoded_len = bytes.len(), "bencoded document");
    Ok(bytes)
}

/// SHA-256 over the canonical bytes of a document.
pub fn canonical_digest(doc: &Document) -> Result<Sha256Digest, CoreError> {
    let bytes = canonical_bytes(doc)?;
    Ok(Sha256Digest::hash(bytes.as_bytes()))
}
