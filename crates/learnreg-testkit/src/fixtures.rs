//! Test fixtures and helpers.
//!
//! Two RSA key pairs exported from GnuPG, plus a message GnuPG clear-signed
//! with one of them. Key generation is slow, so tests share these instead of
//! minting fresh keys.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use learnreg_sign::{Signer, SigningIdentity};

/// Armored secret key of the primary test publisher.
pub const PUBLISHER_SECRET_KEY: &str = include_str!("../fixtures/publisher.sec.asc");
/// Armored public key of the primary test publisher.
pub const PUBLISHER_PUBLIC_KEY: &str = include_str!("../fixtures/publisher.pub.asc");
pub const PUBLISHER_PASS_PHRASE: &str = "correct horse battery staple";
pub const PUBLISHER_KEY_ID: &str = "53C476B9FC702B66";

/// Armored secret key of an unrelated signer.
pub const OTHER_SECRET_KEY: &str = include_str!("../fixtures/other.sec.asc");
/// Armored public key of an unrelated signer.
pub const OTHER_PUBLIC_KEY: &str = include_str!("../fixtures/other.pub.asc");
pub const OTHER_PASS_PHRASE: &str = "another secret";
pub const OTHER_KEY_ID: &str = "426F120B01C6811C";

/// Both public keys exported as one armored key ring.
pub const KEY_RING: &str = include_str!("../fixtures/keyring.pub.asc");

/// GnuPG clear-signature by the publisher over the digest of `{}`.
pub const GNUPG_EMPTY_DOCUMENT_MESSAGE: &str = include_str!("../fixtures/gnupg_empty_doc.asc");

/// A signing identity with its matching public key.
#[derive(Debug, Clone)]
pub struct TestFixture {
    pub secret_key: &'static str,
    pub public_key: &'static str,
    pub pass_phrase: &'static str,
    pub key_id: &'static str,
}

impl TestFixture {
    pub fn publisher() -> Self {
        Self {
            secret_key: PUBLISHER_SECRET_KEY,
            public_key: PUBLISHER_PUBLIC_KEY,
            pass_phrase: PUBLISHER_PASS_PHRASE,
            key_id: PUBLISHER_KEY_ID,
        }
    }

    pub fn other() -> Self {
        Self {
            secret_key: OTHER_SECRET_KEY,
            public_key: OTHER_PUBLIC_KEY,
            pass_phrase: OTHER_PASS_PHRASE,
            key_id: OTHER_KEY_ID,
        }
    }

    /// Where a registry would publish this key.
    pub fn public_key_location(&self) -> String {
        format!(
            "http://keys.example.org/pks/lookup?op=get&search=0x{}",
            self.key_id
        )
    }

    /// Identity carrying the armored key inline.
    pub fn identity(&self) -> SigningIdentity {
        SigningIdentity::new(self.public_key_location(), self.secret_key, self.pass_phrase)
    }

    /// Identity reading the key from `path`.
    pub fn identity_with_key_file(&self, path: &Path) -> SigningIdentity {
        SigningIdentity::new(
            self.public_key_location(),
            path.to_string_lossy(),
            self.pass_phrase,
        )
    }

    pub fn signer(&self) -> Signer {
        Signer::new(self.identity())
    }

    /// Write the secret key into `dir` and return the file path.
    pub fn write_secret_key(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(format!("{}.sec.asc", self.key_id));
        fs::write(&path, self.secret_key)?;
        Ok(path)
    }
}
