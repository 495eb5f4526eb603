//! Error types for signing and verification.
//!
//! Each variant's message is the text shown to whoever is submitting the
//! document; callers must treat every one of them as a hard failure and never
//! submit the document as if it were signed.

use std::path::PathBuf;

use learnreg_core::CoreError;
use thiserror::Error;

/// Errors raised while producing a signature.
#[derive(Debug, Error)]
pub enum SignError {
    /// A required identity field is missing or blank.
    #[error("a required field was not provided with valid input: {0}")]
    NullField(&'static str),

    /// The private key file could not be read.
    #[error("the private key data at {path:?} could not be accessed; provide a readable key file or an armored private key block")]
    KeyStreamUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The key material holds no usable signing key.
    #[error("no private signing key could be found in the provided key data: {0}")]
    NoSigningKey(String),

    /// The OpenPGP engine failed while signing.
    #[error("the document could not be digitally signed; check the private key and pass phrase: {0}")]
    SigningFailed(#[source] pgp::errors::Error),

    /// The document could not be canonically encoded.
    #[error(transparent)]
    Encode(#[from] CoreError),
}

/// Errors raised for malformed verification input.
///
/// A well-formed signature that simply does not match is not an error; the
/// verifier returns `Ok(false)` for it.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("a required field was not provided with valid input: {0}")]
    NullField(&'static str),

    #[error("the public key could not be read as an OpenPGP key ring: {0}")]
    InvalidPublicKey(String),

    #[error("the clear-signed message could not be parsed: {0}")]
    MessageInvalid(String),

    #[error("no signature packet could be read from the message: {0}")]
    SignatureInvalid(String),

    #[error("the signature could not be matched to a key in the key ring: {0}")]
    SignatureNotFound(String),
}

/// Result type for signing operations.
pub type Result<T> = std::result::Result<T, SignError>;
