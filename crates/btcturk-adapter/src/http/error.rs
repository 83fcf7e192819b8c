/*
[INPUT]:  Error sources (URL parsing, credentials, transport, HTTP status, envelope)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the BtcTurk adapter
#[derive(Error, Debug)]
pub enum BtcturkError {
    /// Base address or endpoint path could not be parsed or joined
    #[error("Invalid URL: {0}")]
    MalformedUrl(#[from] url::ParseError),

    /// Account endpoint called without both keys set
    #[error("Missing credentials: public and private key must be set")]
    MissingCredentials,

    /// Private key is not valid standard base64
    #[error("Invalid private key encoding: {0}")]
    InvalidKeyEncoding(#[from] base64::DecodeError),

    /// Public key cannot be carried in an HTTP header
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Server answered with status >= 400; the body is kept verbatim
    #[error("Request: {url}, Status: {status}, Response: {body}")]
    Http {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// Envelope reported a nonzero code
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// Network or connection failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not a well-formed envelope
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl From<serde_json::Error> for BtcturkError {
    fn from(err: serde_json::Error) -> Self {
        BtcturkError::Decode(err.to_string())
    }
}

impl BtcturkError {
    /// Check if a caller-side retry could succeed.
    ///
    /// The client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            BtcturkError::Transport(err) => err.is_timeout() || err.is_connect(),
            BtcturkError::Http { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }

    /// Check if error indicates an authentication problem
    pub fn is_auth_error(&self) -> bool {
        match self {
            BtcturkError::MissingCredentials
            | BtcturkError::InvalidKeyEncoding(_)
            | BtcturkError::InvalidHeader(_) => true,
            BtcturkError::Http { status, .. } => *status == StatusCode::UNAUTHORIZED,
            _ => false,
        }
    }

    /// Exchange error code, if the envelope carried one
    pub fn api_code(&self) -> Option<i64> {
        match self {
            BtcturkError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Create an API error from an envelope code and message
    pub fn api_error(code: i64, message: impl Into<String>) -> Self {
        BtcturkError::Api {
            code,
            message: message.into(),
        }
    }
}

/// Result type alias for BtcTurk operations
pub type Result<T> = std::result::Result<T, BtcturkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let server_err = BtcturkError::Http {
            url: "https://api.btcturk.com/api/v2/trades".to_string(),
            status: StatusCode::BAD_GATEWAY,
            body: "bad gateway".to_string(),
        };
        assert!(server_err.is_retryable());

        let api_err = BtcturkError::api_error(1001, "order not found");
        assert!(!api_err.is_retryable());
        assert!(!BtcturkError::MissingCredentials.is_retryable());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(BtcturkError::MissingCredentials.is_auth_error());
        let unauthorized = BtcturkError::Http {
            url: "https://api.btcturk.com/api/v1/users/balances".to_string(),
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        };
        assert!(unauthorized.is_auth_error());
        assert!(!BtcturkError::Decode("eof".to_string()).is_auth_error());
    }

    #[test]
    fn test_http_error_message_carries_context() {
        let err = BtcturkError::Http {
            url: "https://api.btcturk.com/api/v2/orderbook?pairSymbol=BTC_TRY".to_string(),
            status: StatusCode::NOT_FOUND,
            body: "<html>not found</html>".to_string(),
        };
        let message = err.to_string();

        assert!(message.contains("pairSymbol=BTC_TRY"));
        assert!(message.contains("404 Not Found"));
        assert!(message.contains("<html>not found</html>"));
    }

    #[test]
    fn test_api_error_creation() {
        let err = BtcturkError::api_error(1001, "order not found");
        match err {
            BtcturkError::Api { code, message } => {
                assert_eq!(code, 1001);
                assert_eq!(message, "order not found");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BtcturkError = json_err.into();
        assert!(matches!(err, BtcturkError::Decode(_)));
    }
}
