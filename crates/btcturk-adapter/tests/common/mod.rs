/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for btcturk-adapter tests

use btcturk_adapter::{BtcturkClient, ClientConfig, Credentials};
use wiremock::MockServer;

pub const TEST_PUBLIC_KEY: &str = "abc";
/// base64 of `btcturk-test-private-key`
pub const TEST_PRIVATE_KEY: &str = "YnRjdHVyay10ZXN0LXByaXZhdGUta2V5";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, without credentials
pub fn public_client(server: &MockServer) -> BtcturkClient {
    BtcturkClient::with_config(ClientConfig::default().with_base_url(server.uri()))
        .expect("client init")
}

/// Client pointed at the mock server, with the test key pair
#[allow(dead_code)]
pub fn signed_client(server: &MockServer) -> BtcturkClient {
    public_client(server).with_credentials(Credentials::new(TEST_PUBLIC_KEY, TEST_PRIVATE_KEY))
}

/// Wrap `data` in a success envelope
#[allow(dead_code)]
pub fn success_envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "message": null,
        "code": 0,
        "data": data,
    })
}
