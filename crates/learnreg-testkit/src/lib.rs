//! # Learning Registry Testkit
//!
//! Testing utilities for the Learning Registry client crates.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: documents with their pinned canonical bytes and digests
//! - **Generators**: Proptest strategies for signable documents
//! - **Fixtures**: GnuPG-exported test key pairs and a GnuPG clear-signed message
//!
//! ## Golden Vectors
//!
//! ```rust
//! use learnreg_core::canonical_digest;
//! use learnreg_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     let digest = canonical_digest(&vector.document()).unwrap();
//!     assert_eq!(digest.to_hex(), vector.digest);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use learnreg_core::canonical_digest;
//! use learnreg_testkit::generators::{reverse_key_order, SignableDocument};
//!
//! proptest! {
//!     #[test]
//!     fn digest_ignores_key_order(doc: SignableDocument) {
//!         let reversed = reverse_key_order(&doc.0);
//!         prop_assert_eq!(canonical_digest(&doc.0).unwrap(), canonical_digest(&reversed).unwrap());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust,no_run
//! use learnreg_core::Document;
//! use learnreg_sign::Verifier;
//! use learnreg_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::publisher();
//! let block = fixture.signer().sign(&Document::new()).unwrap();
//! assert!(Verifier::verify_block(&block, fixture.public_key).unwrap());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use generators::{document, reverse_key_order, SignableDocument};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
