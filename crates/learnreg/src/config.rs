//! Client configuration.

use std::fs;
use std::path::Path;

use learnreg_sign::{SignError, Signer, SigningIdentity};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Configuration for a publishing client.
///
/// ```json
/// {
///   "signing": {
///     "public_key_location": "http://keys.example.org/pks/lookup?op=get&search=0x53C476B9FC702B66",
///     "private_key": "/etc/learnreg/publisher.sec.asc",
///     "pass_phrase": "correct horse battery staple"
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Signing identity; optional so that verify-only clients need none.
    #[serde(default)]
    pub signing: Option<SigningIdentity>,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Self::from_json_str(&json)
    }

    /// A signer for the configured identity.
    ///
    /// Fails with `NullField` if the signing section is absent or
    /// incomplete.
    pub fn signer(&self) -> Result<Signer> {
        let identity = self
            .signing
            .as_ref()
            .ok_or(SignError::NullField("signing"))?;
        Ok(Signer::new(identity.to_builder().build()?))
    }
}
