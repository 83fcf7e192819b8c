/*
[INPUT]:  Base64-encoded secret and message bytes
[OUTPUT]: HMAC-SHA256 digests, raw or base64 (standard alphabet)
[POS]:    Auth layer - cryptographic primitive for request authentication
[UPDATE]: When changing signing algorithm or key format
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer keyed by the decoded private key.
///
/// The key bytes are zeroized when the signer is dropped.
#[derive(Debug)]
pub struct HmacSigner {
    key: SecretBox<Vec<u8>>,
}

impl HmacSigner {
    /// Create signer from raw key bytes
    pub fn from_bytes(key: impl Into<Vec<u8>>) -> Self {
        Self {
            key: SecretBox::new(Box::new(key.into())),
        }
    }

    /// Create signer from a base64 (standard alphabet) encoded secret
    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        Ok(Self::from_bytes(BASE64.decode(encoded)?))
    }

    /// Compute the raw HMAC-SHA256 digest of `message`
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.key.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }

    /// Compute the digest and encode it with the standard base64 alphabet
    pub fn sign_base64(&self, message: &[u8]) -> String {
        BASE64.encode(self.sign(message))
    }
}

impl Clone for HmacSigner {
    fn clone(&self) -> Self {
        Self::from_bytes(self.key.expose_secret().clone())
    }
}
