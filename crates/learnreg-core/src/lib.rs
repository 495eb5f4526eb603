//! # Learning Registry Core
//!
//! Pure primitives for publishing to a Learning Registry node: the ordered
//! document model and the canonical pipeline that signatures are computed
//! over.
//!
//! This crate contains no I/O and no key handling.
//!
//! ## Pipeline
//!
//! 1. [`normalize_document`] coerces nulls and booleans to strings and drops
//!    numbers from lists
//! 2. [`bencode_document`] produces the unique [`CanonicalBytes`] with sorted keys
//! 3. [`Sha256Digest::hash`] hashes those bytes
//!
//! [`canonical_digest`] runs all three.
//!
//! ```rust
//! use learnreg_core::{canonical_digest, Document};
//!
//! let doc = Document::new().with("b", "2").with("a", "1");
//! let digest = canonical_digest(&doc).unwrap();
//! assert_eq!(digest.to_hex().len(), 64);
//! ```

pub mod bencode;
pub mod canonical;
pub mod digest;
pub mod error;
pub mod normalize;
pub mod value;

pub use bencode::{bencode, bencode_document, CanonicalBytes};
pub use canonical::{canonical_bytes, canonical_digest};
pub use digest::Sha256Digest;
pub use error::{CoreError, Result};
pub use normalize::{
    normalize_document, normalize_list_item, normalize_value, NormalizedDocument,
    NormalizedValue, NULL_LITERAL,
};
pub use value::{Document, Value};

/// Re-exported so callers can build numeric values without depending on
/// `serde_json` directly.
pub use serde_json::Number;
