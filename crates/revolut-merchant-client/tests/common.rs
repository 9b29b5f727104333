//! Common test utilities for client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use revolut_merchant_client::{Client, ClientConfig};
use wiremock::MockServer;

/// Secret key used by every test client.
pub const SECRET_KEY: &str = "sk_test_key";

/// Test harness: a mock Merchant API and a client pointed at it.
pub struct TestHarness {
    /// The mock server standing in for the Merchant API.
    pub server: MockServer,
    /// A client whose base URL is the mock server.
    pub client: Client,
}

impl TestHarness {
    /// Start a fresh mock server and build a client for it.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let config = ClientConfig::new(SECRET_KEY).with_base_url(server.uri());
        let client = Client::new(config).expect("Failed to build client");

        Self { server, client }
    }

    /// The `Authorization` header value every request must carry.
    pub fn bearer() -> String {
        format!("Bearer {SECRET_KEY}")
    }

    /// Requests received so far for `method` and `path`.
    pub async fn requests_to(&self, method: &str, path: &str) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == method && r.url.path() == path)
            .collect()
    }
}
