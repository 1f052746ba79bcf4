//! Shared test utilities for integration tests.

use tumblr_api::TumblrClient;
use tumblr_core::config::ClientConfig;
use wiremock::MockServer;

/// Test account configuration with both endpoint roots pointed at `root`.
pub fn test_config(root: &str) -> ClientConfig {
    let mut config = ClientConfig::new("user@example.com", "hunter2", "example");
    config.api_timeout_ms = 5_000;
    config.public_root = Some(root.to_string());
    config.private_root = Some(root.to_string());
    config
}

/// Start a mock server and a client routed entirely to it.
pub async fn mock_client() -> (MockServer, TumblrClient) {
    let server = MockServer::start().await;
    let client = TumblrClient::new(&test_config(&server.uri())).expect("failed to build client");
    (server, client)
}
