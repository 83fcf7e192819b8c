/*
[INPUT]:  Public key and base64-encoded private key strings
[OUTPUT]: Credentials value with the private key held as a secret
[POS]:    Auth layer - credential storage
[UPDATE]: When credential fields or redaction rules change
*/

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// BtcTurk API key pair.
///
/// The private key is kept in its base64 form inside a [`SecretString`]
/// (zeroized on drop) and only decoded when a request is signed, so an
/// invalid key surfaces on the first authenticated call rather than here.
pub struct Credentials {
    public_key: String,
    private_key: SecretString,
}

impl Credentials {
    /// Create credentials from the public key and base64 private key
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: SecretString::from(private_key.into()),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Base64 private key; call `expose_secret()` to read it
    pub fn private_key(&self) -> &SecretString {
        &self.private_key
    }

    /// True when both keys are non-empty
    pub fn is_complete(&self) -> bool {
        !self.public_key.is_empty() && !self.private_key.expose_secret().is_empty()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            public_key: self.public_key.clone(),
            private_key: SecretString::from(self.private_key.expose_secret().to_owned()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.public_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("public_key", &format!("{prefix}..."))
            .field("private_key", &self.private_key)
            .finish()
    }
}
