//! Signing envelopes for submission, and checking published documents.

use learnreg_core::{Document, Sha256Digest};
use learnreg_envelope::{
    attach_signature, build_document, signable_document, signature_of, Envelope,
};
use learnreg_sign::{SignatureBlock, Signer, Verifier};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};

/// Turns envelopes into signed, sendable documents.
#[derive(Debug, Clone)]
pub struct Publisher {
    signer: Signer,
}

impl Publisher {
    pub fn new(signer: Signer) -> Self {
        Self { signer }
    }

    /// Create a publisher from the signing section of a configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.signer()?))
    }

    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Build, sign and return the document to send for `envelope`.
    pub fn publish(&self, envelope: &Envelope) -> Result<Document> {
        self.sign_document(build_document(envelope)?)
    }

    /// Sign an already assembled document.
    ///
    /// Node-owned fields and any existing signature are left out of the
    /// digest; the new block replaces an existing `digital_signature`.
    pub fn sign_document(&self, doc: Document) -> Result<Document> {
        let block = self.signer.sign(&signable_document(&doc))?;
        Ok(attach_signature(doc, &block))
    }
}

/// Sign a document, returning the signature block to merge into it.
pub fn sign(signer: &Signer, doc: &Document) -> Result<SignatureBlock> {
    Ok(signer.sign(doc)?)
}

/// Verify a clear-signed message against an armored public key ring.
pub fn verify(message: &str, public_key: &str) -> Result<bool> {
    Ok(Verifier::verify(message, public_key)?)
}

/// Hex SHA-256 of a document's canonical encoding.
pub fn canonical_digest(doc: &Document) -> Result<String> {
    Ok(learnreg_core::canonical_digest(doc)?.to_hex())
}

/// Check a sendable document's `digital_signature`.
///
/// The signature must verify against `public_key`, and the text it signs
/// must be the digest of the document's signable view. A signature lifted
/// from another document fails the second check.
pub fn verify_document(doc: &Document, public_key: &str) -> Result<bool> {
    let block = signature_of(doc).ok_or(Error::Unsigned)?;
    if !Verifier::verify_block(&block, public_key)? {
        return Ok(false);
    }

    let expected = learnreg_core::canonical_digest(&signable_document(doc))?;
    let signed = Verifier::signed_text(block.signature())?;
    debug!(digest = %expected, "checking signed digest");

    if Sha256Digest::from_hex(signed.trim()).ok() != Some(expected) {
        warn!("signature is valid but covers a different document");
        return Ok(false);
    }
    Ok(true)
}
