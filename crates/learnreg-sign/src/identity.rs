//! The signing identity: public key locator, private key, pass phrase.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::SignError;

/// Who signs, and with which key.
///
/// Blank values count as missing. `SigningIdentity` can be built directly,
/// through [`SigningIdentity::builder`] (which refuses to produce an
/// incomplete identity), or deserialized from configuration. Because the
/// last path bypasses the builder, [`Signer::sign`](crate::Signer::sign)
/// re-checks completeness and reports [`SignError::NullField`].
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawIdentity")]
pub struct SigningIdentity {
    public_key_location: Option<String>,
    private_key: Option<String>,
    pass_phrase: Option<String>,
}

impl SigningIdentity {
    /// Create an identity from raw inputs.
    ///
    /// The public key location and private key are trimmed, and an HTML
    /// escaped `&amp;` in the location is decoded. The pass phrase is kept
    /// verbatim unless it is blank.
    pub fn new(
        public_key_location: impl Into<String>,
        private_key: impl Into<String>,
        pass_phrase: impl Into<String>,
    ) -> Self {
        RawIdentity {
            public_key_location: Some(public_key_location.into()),
            private_key: Some(private_key.into()),
            pass_phrase: Some(pass_phrase.into()),
        }
        .into()
    }

    pub fn builder() -> SigningIdentityBuilder {
        SigningIdentityBuilder::default()
    }

    /// A builder pre-filled with this identity's fields.
    pub fn to_builder(&self) -> SigningIdentityBuilder {
        SigningIdentityBuilder {
            raw: RawIdentity {
                public_key_location: self.public_key_location.clone(),
                private_key: self.private_key.clone(),
                pass_phrase: self.pass_phrase.clone(),
            },
        }
    }

    /// Location of the public key, published alongside every signature.
    pub fn public_key_location(&self) -> Option<&str> {
        self.public_key_location.as_deref()
    }

    /// Armored private key text, or a path to a key file.
    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    pub(crate) fn pass_phrase(&self) -> Option<&str> {
        self.pass_phrase.as_deref()
    }

    /// Check that every field is present.
    pub fn validate(&self) -> Result<(), SignError> {
        self.require().map(|_| ())
    }

    /// The three fields, or `NullField` naming the first one missing.
    pub(crate) fn require(&self) -> Result<(&str, &str, &str), SignError> {
        let pass_phrase = self
            .pass_phrase()
            .ok_or(SignError::NullField("pass_phrase"))?;
        let location = self
            .public_key_location()
            .ok_or(SignError::NullField("public_key_location"))?;
        let private_key = self
            .private_key()
            .ok_or(SignError::NullField("private_key"))?;
        Ok((location, private_key, pass_phrase))
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |v: &Option<String>| if v.is_some() { "<redacted>" } else { "<missing>" };
        f.debug_struct("SigningIdentity")
            .field("public_key_location", &self.public_key_location)
            .field("private_key", &redacted(&self.private_key))
            .field("pass_phrase", &redacted(&self.pass_phrase))
            .finish()
    }
}

/// Identity fields as they appear in configuration.
#[derive(Debug, Default, Deserialize)]
struct RawIdentity {
    #[serde(default)]
    public_key_location: Option<String>,
    #[serde(default)]
    private_key: Option<String>,
    #[serde(default)]
    pass_phrase: Option<String>,
}

impl From<RawIdentity> for SigningIdentity {
    fn from(raw: RawIdentity) -> Self {
        Self {
            public_key_location: nullify_blank(raw.public_key_location)
                .map(|loc| loc.trim().replace("&amp;", "&")),
            private_key: nullify_blank(raw.private_key).map(|key| key.trim().to_owned()),
            pass_phrase: nullify_blank(raw.pass_phrase),
        }
    }
}

fn nullify_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Builder that only yields complete identities.
#[derive(Default)]
pub struct SigningIdentityBuilder {
    raw: RawIdentity,
}

impl SigningIdentityBuilder {
    pub fn public_key_location(mut self, location: impl Into<String>) -> Self {
        self.raw.public_key_location = Some(location.into());
        self
    }

    /// Armored private key block text, or a path to a file containing one.
    pub fn private_key(mut self, key: impl Into<String>) -> Self {
        self.raw.private_key = Some(key.into());
        self
    }

    /// Path to a private key file.
    pub fn private_key_file(self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_string_lossy().into_owned();
        self.private_key(path)
    }

    pub fn pass_phrase(mut self, pass_phrase: impl Into<String>) -> Self {
        self.raw.pass_phrase = Some(pass_phrase.into());
        self
    }

    /// Build the identity, or fail with `NullField` naming a missing field.
    pub fn build(self) -> Result<SigningIdentity, SignError> {
        let identity = SigningIdentity::from(self.raw);
        identity.validate()?;
        Ok(identity)
    }
}
