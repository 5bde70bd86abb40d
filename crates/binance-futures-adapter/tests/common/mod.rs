/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-adapter tests

use binance_futures_adapter::{BinanceFuturesClient, ClientConfig, Credentials, RequestSigner};
use wiremock::{Match, MockServer, Request};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials(base_url: &str) -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET, base_url)
}

pub fn test_client(server: &MockServer) -> BinanceFuturesClient {
    BinanceFuturesClient::with_config(test_credentials(&server.uri()), ClientConfig::default())
        .expect("client init")
}

/// Matches when the body's trailing `signature` is the HMAC of everything before it.
pub struct ValidBodySignatureMatcher {
    pub secret: &'static str,
}

impl Match for ValidBodySignatureMatcher {
    fn matches(&self, request: &Request) -> bool {
        let Ok(body) = std::str::from_utf8(&request.body) else {
            return false;
        };
        let Some((query, signature)) = body.rsplit_once("&signature=") else {
            return false;
        };
        RequestSigner::new(self.secret).signature(query) == signature
    }
}
