//! Envelope construction errors.

use thiserror::Error;

/// Errors raised while assembling an envelope.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// A document envelope was given no resource data.
    #[error("the resource data is empty; a document envelope needs a payload")]
    NoData,

    /// A non-delete envelope was given no resource locator.
    #[error("the resource locator is missing; every published document needs one")]
    NoLocator,

    /// JSON resource data did not parse to an object.
    #[error("the resource data is not a valid JSON object: {0}")]
    InvalidJson(String),
}

/// Result type for envelope construction.
pub type Result<T> = std::result::Result<T, EnvelopeError>;
