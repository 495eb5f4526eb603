//! Error types for the canonical pipeline.

use thiserror::Error;

/// Errors that can occur while building or encoding documents.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value reached the encoder that bencoding cannot represent.
    ///
    /// Normalized documents only contain strings, integers, lists and maps,
    /// so this indicates a caller bypassed normalization.
    #[error("the document could not be bencoded: {0}")]
    Encode(String),

    #[error("expected a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
