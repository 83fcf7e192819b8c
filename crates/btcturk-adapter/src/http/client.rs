/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client, built requests, decoded envelopes
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, Request, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::Credentials;
use crate::http::envelope::{decode_envelope, decode_success};
use crate::http::{BtcturkError, RequestSigner, Result};

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.btcturk.com";

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Main HTTP client for the BtcTurk API.
///
/// Holds no per-request state: parameters travel in a [`Params`] value
/// handed to each endpoint, so one client can serve concurrent calls.
///
/// [`Params`]: crate::http::Params
#[derive(Debug, Clone)]
pub struct BtcturkClient {
    http_client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl BtcturkClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("btcturk-adapter/{VERSION}"));
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(&config.base_url)?,
            credentials: None,
        })
    }

    pub fn version() -> &'static str {
        VERSION
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Point the client at another host; fails with `MalformedUrl`
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        self.base_url = Url::parse(base_url)?;
        Ok(())
    }

    /// Set the key pair used by account endpoints
    pub fn set_credentials(&mut self, public_key: impl Into<String>, private_key: impl Into<String>) {
        self.credentials = Some(Credentials::new(public_key, private_key));
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials
            .as_ref()
            .is_some_and(Credentials::is_complete)
    }

    /// Resolve `endpoint` (path plus optional pre-encoded query) against
    /// the base URL and build a request.
    pub fn request(&self, method: Method, endpoint: &str, body: Option<Vec<u8>>) -> Result<Request> {
        let url = self.base_url.join(endpoint)?;
        let mut builder = self.http_client.request(method, url);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        Ok(builder.build()?)
    }

    /// Build a request and sign it with the configured credentials.
    ///
    /// Credentials are checked first so a missing key never reaches the
    /// network.
    pub fn signed_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BtcturkError::MissingCredentials)?;
        let signer = RequestSigner::new(credentials)?;

        let mut request = self.request(method, endpoint, body)?;
        signer.authenticate(&mut request)?;
        Ok(request)
    }

    /// Execute `request` and decode the envelope payload as `T`
    pub async fn send_json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let body = self.execute(request).await?;
        let result = decode_envelope(&body);
        if let Err(err) = &result {
            warn!(error = %err, "envelope rejected");
        }
        result
    }

    /// Execute `request` and report the envelope's success flag
    pub async fn send_success(&self, request: Request) -> Result<bool> {
        let body = self.execute(request).await?;
        let result = decode_success(&body);
        if let Err(err) = &result {
            warn!(error = %err, "envelope rejected");
        }
        result
    }

    /// Send the request and buffer the whole body.
    ///
    /// Status >= 400 returns `Http` with the raw body; no envelope
    /// parsing is attempted for those responses.
    async fn execute(&self, request: Request) -> Result<Vec<u8>> {
        let method = request.method().clone();
        let url = request.url().to_string();
        debug!(%method, %url, "sending request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(%method, %url, status = status.as_u16(), bytes = body.len(), "response received");

        if status.as_u16() >= 400 {
            warn!(%method, %url, status = status.as_u16(), "request failed");
            return Err(BtcturkError::Http {
                url,
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config_points_at_production() {
        let client = BtcturkClient::new().unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.btcturk.com/");
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_set_base_url_rejects_garbage() {
        let mut client = BtcturkClient::new().unwrap();
        let err = client.set_base_url("not a url").unwrap_err();
        assert!(matches!(err, BtcturkError::MalformedUrl(_)));
        assert_eq!(client.base_url().as_str(), "https://api.btcturk.com/");
    }

    #[test]
    fn test_with_config_rejects_garbage_base_url() {
        let config = ClientConfig::default().with_base_url("::::");
        assert!(matches!(
            BtcturkClient::with_config(config),
            Err(BtcturkError::MalformedUrl(_))
        ));
    }

    #[test]
    fn test_request_resolves_relative_path() {
        let mut client = BtcturkClient::new().unwrap();

        for base in ["https://api.example.com", "https://api.example.com/"] {
            client.set_base_url(base).unwrap();
            let request = client
                .request(Method::GET, "/api/v2/orderbook?pairSymbol=BTC_TRY", None)
                .unwrap();
            assert_eq!(
                request.url().as_str(),
                "https://api.example.com/api/v2/orderbook?pairSymbol=BTC_TRY"
            );
        }
    }

    #[test]
    fn test_request_carries_method_and_body() {
        let client = BtcturkClient::new().unwrap();
        let request = client
            .request(Method::POST, "/api/v1/order", Some(b"{}".to_vec()))
            .unwrap();

        assert_eq!(*request.method(), Method::POST);
        assert_eq!(request.body().and_then(|b| b.as_bytes()), Some(&b"{}"[..]));
    }

    #[rstest]
    #[case("http://[::1/api/v2/trades")]
    #[case("https://exa mple.com/api/v2/trades")]
    #[case("http://host:99999/api")]
    fn test_request_rejects_unparsable_endpoint(#[case] endpoint: &str) {
        let client = BtcturkClient::new().unwrap();
        let err = client.request(Method::GET, endpoint, None).unwrap_err();
        assert!(matches!(err, BtcturkError::MalformedUrl(_)));
    }

    #[test]
    fn test_request_rejects_cannot_be_a_base() {
        let mut client = BtcturkClient::new().unwrap();
        client.set_base_url("mailto:ops@example.com").unwrap();
        let err = client.request(Method::GET, "/api/v2/trades", None).unwrap_err();
        assert!(matches!(err, BtcturkError::MalformedUrl(_)));
    }

    #[test]
    fn test_signed_request_requires_credentials() {
        let client = BtcturkClient::new().unwrap();
        let err = client
            .signed_request(Method::GET, "/api/v1/users/balances", None)
            .unwrap_err();
        assert!(matches!(err, BtcturkError::MissingCredentials));

        let mut client = BtcturkClient::new().unwrap();
        client.set_credentials("public", "");
        assert!(!client.has_credentials());
        let err = client
            .signed_request(Method::GET, "/api/v1/users/balances", None)
            .unwrap_err();
        assert!(matches!(err, BtcturkError::MissingCredentials));
    }

    #[test]
    fn test_signed_request_sets_auth_headers() {
        let client = BtcturkClient::new()
            .unwrap()
            .with_credentials(Credentials::new("abc", "YnRjdHVyay10ZXN0LXByaXZhdGUta2V5"));
        let request = client
            .signed_request(Method::GET, "/api/v1/users/balances", None)
            .unwrap();

        let headers = request.headers();
        assert_eq!(headers["X-PCK"], "abc");
        assert!(headers.contains_key("X-Stamp"));
        assert!(headers.contains_key("X-Signature"));
        assert_eq!(headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_version_matches_package() {
        assert_eq!(BtcturkClient::version(), env!("CARGO_PKG_VERSION"));
    }
}
