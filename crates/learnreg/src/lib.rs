//! # Learning Registry Client
//!
//! Publishing documents to a Learning Registry node: canonical digests,
//! OpenPGP clear-signing, and verification.
//!
//! ## Overview
//!
//! A registry signature covers the SHA-256 digest of a document's canonical
//! form rather than the document's JSON text:
//!
//! 1. **Normalize**: nulls and booleans become strings, numbers inside lists
//!    are dropped
//! 2. **Bencode**: a unique byte string with dictionary keys sorted
//! 3. **Digest**: SHA-256, lowercase hex
//! 4. **Clear-sign**: the hex digest, with the publisher's OpenPGP key
//!
//! The armored message, the signing method and the public key location are
//! merged back into the document as `digital_signature`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use learnreg::{verify_document, Config, Publisher};
//! use learnreg::envelope::{Envelope, EnvelopeMeta, SimpleDocument};
//!
//! let config = Config::from_file("learnreg.json")?;
//! let publisher = Publisher::from_config(&config)?;
//!
//! let envelope = Envelope::from(
//!     SimpleDocument::new("<lom/>", "http://example.org/lesson/1")?
//!         .resource_data_type("metadata")
//!         .meta(EnvelopeMeta::new().submitter("Example Library").submitter_type("agent")),
//! );
//! let doc = publisher.publish(&envelope)?;
//!
//! let public_key = std::fs::read_to_string("publisher.pub.asc").unwrap();
//! assert!(verify_document(&doc, &public_key)?);
//! # Ok::<(), learnreg::Error>(())
//! ```
//!
//! ## Re-exports
//!
//! - `learnreg::core` - document model and canonical pipeline
//! - `learnreg::sign` - signer, verifier, signature blocks
//! - `learnreg::envelope` - envelope variants

pub mod config;
pub mod error;
pub mod publisher;

pub use learnreg_core as core;
pub use learnreg_envelope as envelope;
pub use learnreg_sign as sign;

pub use config::Config;
pub use error::{Error, Result};
pub use publisher::{canonical_digest, sign, verify, verify_document, Publisher};

pub use learnreg_core::{Document, Value};
pub use learnreg_sign::{SignatureBlock, Signer, SigningIdentity, Verifier, SIGNING_METHOD};
