//! Clear-signing canonical document digests.

use std::borrow::Cow;

use learnreg_core::{canonical_digest, Document, Value};
use pgp::cleartext::CleartextSignedMessage;
use pgp::ArmorOptions;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::armor::ensure_signature_break;
use crate::error::{Result, SignError};
use crate::identity::SigningIdentity;
use crate::key::{resolve_signing_key, SigningKey};

/// Identifier of the signature scheme, carried in every signature block.
pub const SIGNING_METHOD: &str = "LR-PGP.1.0";

/// Signature metadata merged into an outgoing document.
///
/// Created once per submission and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBlock {
    signing_method: String,
    key_location: Vec<String>,
    signature: String,
}

impl SignatureBlock {
    pub fn new(key_location: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            signing_method: SIGNING_METHOD.to_owned(),
            key_location: vec![key_location.into()],
            signature: signature.into(),
        }
    }

    pub fn signing_method(&self) -> &str {
        &self.signing_method
    }

    pub fn key_location(&self) -> &[String] {
        &self.key_location
    }

    /// The armored clear-signed message.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Wire form, in the field order registry nodes emit.
    pub fn to_document(&self) -> Document {
        Document::new()
            .with("signing_method", self.signing_method.as_str())
            .with(
                "key_location",
                Value::List(self.key_location.iter().map(|l| Value::from(l.as_str())).collect()),
            )
            .with("signature", self.signature.as_str())
    }

    /// Read a block back from its wire form.
    ///
    /// Returns `None` if any field is missing or has the wrong shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        let doc = value.as_document()?;
        let key_location = doc
            .get("key_location")?
            .as_list()?
            .iter()
            .map(|v| v.as_str().map(str::to_owned))
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            signing_method: doc.get("signing_method")?.as_str()?.to_owned(),
            key_location,
            signature: doc.get("signature")?.as_str()?.to_owned(),
        })
    }
}

impl From<SignatureBlock> for Value {
    fn from(block: SignatureBlock) -> Self {
        Value::Map(block.to_document())
    }
}

/// Produces signature blocks for documents.
///
/// Holds nothing but the identity; the key is resolved on every call, so a
/// `Signer` can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Signer {
    identity: SigningIdentity,
}

impl Signer {
    pub fn new(identity: SigningIdentity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &SigningIdentity {
        &self.identity
    }

    /// Sign a document.
    ///
    /// The document is normalized, bencoded and hashed; the hex digest is
    /// what gets clear-signed.
    pub fn sign(&self, doc: &Document) -> Result<SignatureBlock> {
        let (location, _, _) = self.identity.require()?;

        let digest = canonical_digest(doc)?;
        debug!(digest = %digest, "signing document digest");

        let signature = self.clear_sign(&digest.to_hex())?;
        Ok(SignatureBlock::new(location, signature))
    }

    /// Clear-sign arbitrary text with the configured key.
    pub fn clear_sign(&self, text: &str) -> Result<String> {
        let (_, private_key, pass_phrase) = self.identity.require()?;
        let key = resolve_signing_key(private_key)?;
        key.unlock(pass_phrase)?;

        let mut rng = rand::thread_rng();
        let password = || pass_phrase.to_owned();
        let message = match &key {
            SigningKey::Primary(k) => CleartextSignedMessage::sign(&mut rng, text, k, password),
            SigningKey::Subkey(s) => CleartextSignedMessage::sign(&mut rng, text, &s.key, password),
        }
        .map_err(SignError::SigningFailed)?;

        let armored = message
            .to_armored_string(ArmorOptions::default())
            .map_err(SignError::SigningFailed)?;
        trace!(len = armored.len(), "armored clear-signed message");

        Ok(match ensure_signature_break(&armored) {
            Cow::Borrowed(_) => armored,
            Cow::Owned(repaired) => {
                warn!("inserted missing line break before signature armor");
                repaired
            }
        })
    }
}
