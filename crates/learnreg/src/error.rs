//! Error types for the publishing client.

use std::path::PathBuf;

use learnreg_core::CoreError;
use learnreg_envelope::EnvelopeError;
use learnreg_sign::{SignError, VerifyError};
use thiserror::Error;

/// Errors that can occur while publishing or verifying documents.
///
/// Any of these aborts the submission at hand; a document must never be
/// sent as signed after one of them.
#[derive(Debug, Error)]
pub enum Error {
    /// Canonical encoding error.
    #[error("canonical encoding error: {0}")]
    Core(#[from] CoreError),

    /// Signing error.
    #[error("signing error: {0}")]
    Sign(#[from] SignError),

    /// Verification input error.
    #[error("verification error: {0}")]
    Verify(#[from] VerifyError),

    /// Envelope construction error.
    #[error("envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    /// The configuration file could not be read.
    #[error("could not read configuration from {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON of the expected shape.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The document carries no `digital_signature` block.
    #[error("the document is not signed")]
    Unsigned,
}

/// Result type for publishing operations.
pub type Result<T> = std::result::Result<T, Error>;
