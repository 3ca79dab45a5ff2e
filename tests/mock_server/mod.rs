//! Mock HTTP server setup for integration tests
#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use unreel_client::{AnalysisClient, RetryPolicy};

/// Test fixture that owns a mock backend mounted like the real one.
pub struct MockServerFixture {
    pub server: ServerGuard,
    /// `<server>/api/v1`
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = format!("{}/api/v1", server.url());
        Self { server, base_url }
    }

    /// Client pointed at the mock server with the default (no retry) policy.
    pub fn client(&self) -> AnalysisClient {
        AnalysisClient::builder()
            .base_url(&self.base_url)
            .build()
            .expect("client should build against mock server")
    }

    pub fn client_with_retry(&self, policy: RetryPolicy) -> AnalysisClient {
        AnalysisClient::builder()
            .base_url(&self.base_url)
            .retry_policy(policy)
            .build()
            .expect("client should build against mock server")
    }

    /// Mock a POST that must carry `expected_body` as JSON, answering once.
    pub async fn mock_post(
        &mut self,
        path: &str,
        expected_body: serde_json::Value,
        status: usize,
        response_body: &str,
    ) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(expected_body))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(response_body)
            .expect(1)
            .create_async()
            .await
    }

    /// Mock any POST to `path` with a plain-text or JSON error body.
    pub async fn mock_error(&mut self, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", path)
            .with_status(status)
            .with_body(body)
            .expect(1)
            .create_async()
            .await
    }
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/v1", port)
}
