//! The optional retry policy: network errors only, bounded.

mod mock_server;

use mock_server::{unreachable_base_url, MockServerFixture};
use std::time::{Duration, Instant};
use unreel_client::{AnalysisClient, ErrorKind, RetryPolicy};

#[tokio::test]
async fn server_errors_are_never_retried() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_error("/api/v1/analyze/", 500, r#"{"detail":"boom"}"#)
        .await;

    let client = fixture.client_with_retry(RetryPolicy::network_only(3));
    let err = client
        .analyze("https://example.com/video.mp4")
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind(), ErrorKind::ServerError);
}

#[tokio::test]
async fn default_client_makes_a_single_attempt() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_error("/api/v1/chat/", 503, "").await;

    let _ = fixture.client().chat("a1", "hi").await;

    mock.assert_async().await;
}

#[tokio::test]
async fn network_errors_are_retried_with_backoff() {
    let policy = RetryPolicy::network_only(2)
        .with_delays(Duration::from_millis(20), Duration::from_millis(100));
    let client = AnalysisClient::builder()
        .base_url(unreachable_base_url())
        .retry_policy(policy)
        .build()
        .unwrap();

    let start = Instant::now();
    let err = client.chat("a1", "hi").await.unwrap_err();

    // 20ms + 40ms of backoff between three attempts
    assert!(start.elapsed() >= Duration::from_millis(60));
    assert_eq!(err.kind(), ErrorKind::NetworkError);
}
