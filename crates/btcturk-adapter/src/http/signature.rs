/*
[INPUT]:  Credentials and an outgoing reqwest::Request
[OUTPUT]: Request carrying X-PCK, X-Stamp, X-Signature and Content-Type headers
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use chrono::Utc;
use reqwest::Request;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use secrecy::ExposeSecret;

use crate::auth::{Credentials, HmacSigner};
use crate::http::{BtcturkError, Result};

pub const HEADER_PUBLIC_KEY: &str = "X-PCK";
pub const HEADER_STAMP: &str = "X-Stamp";
pub const HEADER_SIGNATURE: &str = "X-Signature";

/// Signs requests for BtcTurk account endpoints
#[derive(Debug)]
pub struct RequestSigner {
    public_key: String,
    signer: HmacSigner,
}

impl RequestSigner {
    /// Validate the key pair and decode the private key.
    ///
    /// Empty keys fail with `MissingCredentials` before any decoding.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        if !credentials.is_complete() {
            return Err(BtcturkError::MissingCredentials);
        }

        let signer = HmacSigner::from_base64(credentials.private_key().expose_secret())?;
        Ok(Self {
            public_key: credentials.public_key().to_string(),
            signer,
        })
    }

    /// Current Unix time in milliseconds
    pub fn timestamp() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Sign a request stamp
    ///
    /// Format: HMAC-SHA256(private_key, "{public_key}{timestamp}")
    /// Returns base64-encoded signature (standard alphabet)
    pub fn sign(&self, timestamp: i64) -> String {
        let message = format!("{}{}", self.public_key, timestamp);
        self.signer.sign_base64(message.as_bytes())
    }

    /// Stamp `request` with the auth headers for the current time
    pub fn authenticate(&self, request: &mut Request) -> Result<()> {
        self.authenticate_at(request, Self::timestamp())
    }

    /// Stamp `request` with the auth headers for a given timestamp
    pub fn authenticate_at(&self, request: &mut Request, timestamp: i64) -> Result<()> {
        let signature = self.sign(timestamp);
        let headers = request.headers_mut();

        headers.insert(
            HeaderName::from_static("x-pck"),
            HeaderValue::from_str(&self.public_key)?,
        );
        headers.insert(
            HeaderName::from_static("x-stamp"),
            HeaderValue::from_str(&timestamp.to_string())?,
        );
        headers.insert(
            HeaderName::from_static("x-signature"),
            HeaderValue::from_str(&signature)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(())
    }
}
