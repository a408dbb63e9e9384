//! Common test utilities for Mochi client tests.

use mochi::MochiClient;
use serde::Serialize;
use wiremock::{MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server.
pub fn client_for(server: &MockServer) -> MochiClient {
    MochiClient::builder()
        .url(server.uri())
        .api_key("test-key")
        .build()
        .unwrap()
}

/// Create a successful JSON response.
pub fn mock_json<T: Serialize>(body: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Create an error response with a Mochi-style error body.
#[allow(dead_code)] // Not all test files use this
pub fn mock_error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "errors": { "message": message }
    }))
}
