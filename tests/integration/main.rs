//! Integration tests using WireMock
//!
//! These tests drive the real reqwest transport against a mock HTTP server,
//! covering request shape, authentication, status classification and
//! payload normalization end to end.

mod abuse;
mod billing;
mod errors;
mod support;
mod video_library;

use bunnycdn_client::BunnyClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_KEY: &str = "test-access-key";

/// Starts a mock server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Builds a client with the test key pointed at `server`.
pub fn client_for(server: &MockServer) -> BunnyClient {
    BunnyClient::builder()
        .api_key(TEST_KEY)
        .base_url(server.uri())
        .allow_insecure(true)
        .build()
        .expect("Failed to build client")
}

/// Builds a client without a key pointed at `server`.
pub fn keyless_client_for(server: &MockServer) -> BunnyClient {
    BunnyClient::builder()
        .base_url(server.uri())
        .allow_insecure(true)
        .build()
        .expect("Failed to build client")
}

/// Mock expecting the test key on `method_matcher path_matcher`.
pub fn mock_with_auth(method_matcher: &str, path_matcher: &str) -> wiremock::MockBuilder {
    Mock::given(method(method_matcher))
        .and(path(path_matcher))
        .and(header("AccessKey", TEST_KEY))
}

/// Error response in the API's body format.
pub fn error_response(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "ErrorKey": "error",
        "Field": null,
        "Message": message
    }))
}

/// 200 response with a JSON body.
pub fn success_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}
