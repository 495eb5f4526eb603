//! # Learning Registry Signing
//!
//! OpenPGP clear-signing of canonical document digests, and verification of
//! the resulting messages.
//!
//! ## Overview
//!
//! A registry signature is not computed over the document itself. The
//! document is canonicalized and hashed (see `learnreg_core`), and the
//! 64-character hex digest is clear-signed. The armored message travels in
//! a [`SignatureBlock`] together with the signing method
//! ([`SIGNING_METHOD`]) and the location of the public key.
//!
//! ## Key Material
//!
//! The private key setting of a [`SigningIdentity`] is either an armored
//! `PGP PRIVATE KEY BLOCK` or the path of a file containing one. Files are
//! read on every signature; nothing is cached.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use learnreg_core::Document;
//! use learnreg_sign::{Signer, SigningIdentity, Verifier};
//!
//! let identity = SigningIdentity::builder()
//!     .public_key_location("http://keys.example.org/pks/lookup?op=get&search=0x53C476B9FC702B66")
//!     .private_key_file("/etc/learnreg/publisher.sec.asc")
//!     .pass_phrase("correct horse battery staple")
//!     .build()?;
//!
//! let signer = Signer::new(identity);
//! let block = signer.sign(&Document::new().with("doc_type", "resource_data"))?;
//!
//! let public_key = std::fs::read_to_string("/etc/learnreg/publisher.pub.asc")?;
//! assert!(Verifier::verify_block(&block, &public_key)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod armor;
pub mod error;
pub mod identity;
pub mod key;
pub mod signer;
pub mod verify;

pub use error::{Result, SignError, VerifyError};
pub use identity::{SigningIdentity, SigningIdentityBuilder};
pub use key::{KeySource, SigningKey};
pub use signer::{SignatureBlock, Signer, SIGNING_METHOD};
pub use verify::Verifier;
