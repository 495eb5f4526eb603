//! # Learning Registry Envelopes
//!
//! The documents a publisher submits to a Learning Registry node.
//!
//! ## Variants
//!
//! - [`SimpleDocument`]: text resource data, typically XML metadata
//! - [`JsonDocument`]: resource data given as a JSON object
//! - [`Activity`]: a paradata statement (`LR Paradata 1.0`)
//! - [`Delete`]: retracts earlier submissions
//!
//! Each variant builds an ordered [`Document`](learnreg_core::Document) with
//! [`build_document`]. Signing is defined on that document only:
//! [`signable_document`] strips node-owned fields, the signer digests what is
//! left, and [`attach_signature`] merges the resulting block back in.
//!
//! ```rust
//! use learnreg_envelope::{build_document, signable_document, Envelope, EnvelopeMeta, SimpleDocument};
//!
//! let envelope = Envelope::from(
//!     SimpleDocument::new("<lom/>", "http://example.org/lesson/1")?
//!         .resource_data_type("metadata")
//!         .meta(EnvelopeMeta::new().submitter("Example Library").submitter_type("agent")),
//! );
//!
//! let doc = build_document(&envelope)?;
//! assert_eq!(signable_document(&doc), doc);
//! # Ok::<(), learnreg_envelope::EnvelopeError>(())
//! ```

pub mod envelope;
pub mod error;
pub mod meta;
pub mod signable;

pub use envelope::{
    build_document, Activity, Delete, Envelope, JsonDocument, SimpleDocument, DOC_TYPE,
    DOC_VERSION,
};
pub use error::{EnvelopeError, Result};
pub use meta::EnvelopeMeta;
pub use signable::{
    attach_signature, signable_document, signature_of, DIGITAL_SIGNATURE_FIELD, EXCLUDED_FIELDS,
};
