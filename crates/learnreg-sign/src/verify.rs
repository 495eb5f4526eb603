//! Verification of clear-signed messages against a public key ring.

use pgp::cleartext::CleartextSignedMessage;
use pgp::types::{KeyId, PublicKeyTrait};
use pgp::{Deserializable, SignedPublicKey, SignedPublicSubKey, StandaloneSignature};
use tracing::{debug, warn};

use crate::armor::{ensure_signature_break, recover_plaintext, signature_block};
use crate::error::VerifyError;
use crate::signer::SignatureBlock;

/// Checks clear-signed messages.
///
/// Stateless: every call parses its own inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verifier;

/// A verification candidate from the ring.
enum RingKey<'a> {
    Primary(&'a SignedPublicKey),
    Subkey(&'a SignedPublicSubKey),
}

impl RingKey<'_> {
    fn key_id(&self) -> KeyId {
        match self {
            RingKey::Primary(key) => key.primary_key.key_id(),
            RingKey::Subkey(sub) => sub.key.key_id(),
        }
    }

    /// `Ok(false)` when the signature does not match this key; engine
    /// failures that say nothing about the match are errors.
    fn verifies(&self, message: &CleartextSignedMessage) -> Result<bool, VerifyError> {
        let outcome = match self {
            RingKey::Primary(key) => message.verify(*key).map(|_| ()),
            RingKey::Subkey(sub) => message.verify(&sub.key).map(|_| ()),
        };
        let key_id = hex::encode_upper(self.key_id().as_ref());
        match outcome {
            Ok(()) => Ok(true),
            Err(e) if is_engine_failure(&e) => Err(VerifyError::SignatureNotFound(format!(
                "key {key_id} could not check the signature: {e}"
            ))),
            Err(e) => {
                debug!(key_id = %key_id, error = %e, "key did not verify");
                Ok(false)
            }
        }
    }
}

/// Errors raised because the engine cannot process the signature or key at
/// all, as opposed to a signature that was checked and did not match.
fn is_engine_failure(error: &pgp::errors::Error) -> bool {
    matches!(
        error,
        pgp::errors::Error::Unsupported(_) | pgp::errors::Error::Unimplemented(_)
    )
}

impl Verifier {
    /// Verify a clear-signed message against an armored public key ring.
    ///
    /// Returns `Ok(false)` when the signature is well formed but does not
    /// match the signed text. Malformed input of any kind is an error.
    pub fn verify(message: &str, public_key: &str) -> Result<bool, VerifyError> {
        if message.trim().is_empty() {
            return Err(VerifyError::NullField("message"));
        }
        if public_key.trim().is_empty() {
            return Err(VerifyError::NullField("public_key"));
        }

        let ring = parse_public_key_ring(public_key)?;
        let message = ensure_signature_break(message);

        recover_plaintext(&message).ok_or_else(|| {
            VerifyError::MessageInvalid("the signed text could not be located".into())
        })?;
        let block = signature_block(&message).ok_or_else(|| {
            VerifyError::SignatureInvalid("no armored signature block".into())
        })?;
        let (signature, _headers) = StandaloneSignature::from_string(block)
            .map_err(|e| VerifyError::SignatureInvalid(e.to_string()))?;
        let (cleartext, _headers) = CleartextSignedMessage::from_string(&message)
            .map_err(|e| VerifyError::MessageInvalid(e.to_string()))?;

        let issuers: Vec<KeyId> = signature.signature.issuer().into_iter().cloned().collect();
        let candidates: Vec<RingKey<'_>> = ring
            .iter()
            .flat_map(|key| {
                std::iter::once(RingKey::Primary(key))
                    .chain(key.public_subkeys.iter().map(RingKey::Subkey))
            })
            .filter(|candidate| issuers.is_empty() || issuers.contains(&candidate.key_id()))
            .collect();

        if candidates.is_empty() {
            let wanted: Vec<String> = issuers
                .iter()
                .map(|id| hex::encode_upper(id.as_ref()))
                .collect();
            return Err(VerifyError::SignatureNotFound(format!(
                "issuer {} is not in the key ring",
                wanted.join(", ")
            )));
        }

        let mut engine_failure = None;
        for candidate in &candidates {
            match candidate.verifies(&cleartext) {
                Ok(true) => return Ok(true),
                Ok(false) => {}
                Err(e) => engine_failure = Some(e),
            }
        }
        if let Some(e) = engine_failure {
            return Err(e);
        }
        warn!("signature did not verify against the signed text");
        Ok(false)
    }

    /// Verify the message carried by a signature block.
    pub fn verify_block(block: &SignatureBlock, public_key: &str) -> Result<bool, VerifyError> {
        Self::verify(block.signature(), public_key)
    }

    /// The text a clear-signed message claims to sign.
    ///
    /// For registry signatures this is the hex digest of the canonical
    /// document, so it can be compared against a freshly computed digest.
    pub fn signed_text(message: &str) -> Result<String, VerifyError> {
        if message.trim().is_empty() {
            return Err(VerifyError::NullField("message"));
        }
        recover_plaintext(&ensure_signature_break(message)).ok_or_else(|| {
            VerifyError::MessageInvalid("the signed text could not be located".into())
        })
    }
}

fn parse_public_key_ring(armored: &str) -> Result<Vec<SignedPublicKey>, VerifyError> {
    let (keys, _headers) = SignedPublicKey::from_armor_many(armored.as_bytes())
        .map_err(|e| VerifyError::InvalidPublicKey(e.to_string()))?;
    let keys = keys
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| VerifyError::InvalidPublicKey(e.to_string()))?;
    if keys.is_empty() {
        return Err(VerifyError::InvalidPublicKey("the key ring is empty".into()));
    }
    Ok(keys)
}
