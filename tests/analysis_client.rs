//! Integration tests for `analyze` and `check_health` against a mock backend.

mod mock_server;

use mock_server::{unreachable_base_url, MockServerFixture};
use serde_json::json;
use unreel_client::client::{NETWORK_ERROR_MESSAGE, SERVER_UNREACHABLE_MESSAGE};
use unreel_client::{AnalysisClient, ErrorKind};

const VIDEO_URL: &str = "https://example.com/video.mp4";

#[tokio::test]
async fn analyze_posts_url_and_returns_result() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_post(
            "/api/v1/analyze/",
            json!({"url": VIDEO_URL}),
            200,
            r#"{"analysisId":"test-id","originalUrl":"https://example.com/video.mp4","status":"completed"}"#,
        )
        .await;

    let result = fixture.client().analyze(VIDEO_URL).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.analysis_id, "test-id");
    assert_eq!(result.original_url, VIDEO_URL);
    assert_eq!(result.status, "completed");
}

#[tokio::test]
async fn analyze_decodes_full_payload() {
    let mut fixture = MockServerFixture::new().await;
    let body = json!({
        "analysisId": "a-42",
        "originalUrl": VIDEO_URL,
        "status": "completed",
        "metadata": {"title": "Borrow checker explained"},
        "content": {
            "summary": "A tour of ownership.",
            "keyTopics": ["ownership", "lifetimes"],
            "mentionedResources": [{"type": "Book", "name": "The Rust Programming Language"}]
        },
        "fullTranscript": "Today we talk about ownership.",
        "detectedLanguage": "en",
        "supportedLanguages": {"en": "English", "fr": "French"},
        "createdAt": "2024-05-01T10:00:00.123456"
    });
    let _mock = fixture
        .mock_post("/api/v1/analyze/", json!({"url": VIDEO_URL}), 200, &body.to_string())
        .await;

    let result = fixture.client().analyze(VIDEO_URL).await.unwrap();

    assert_eq!(result.title(), "Borrow checker explained");
    assert_eq!(result.key_topics().len(), 2);
    assert_eq!(result.mentioned_resources()[0].name, "The Rust Programming Language");
    assert_eq!(result.full_transcript(), "Today we talk about ownership.");
    assert_eq!(result.supported_languages().get("fr").map(String::as_str), Some("French"));
}

#[tokio::test]
async fn analyze_404_is_not_found_with_fixed_message() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_error("/api/v1/analyze/", 404, r#"{"detail":"Not Found"}"#)
        .await;

    let err = fixture.client().analyze(VIDEO_URL).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.message(), SERVER_UNREACHABLE_MESSAGE);
    assert_eq!(err.status, Some(404));
}

#[tokio::test]
async fn analyze_400_passes_server_detail_verbatim() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error("/api/v1/analyze/", 400, r#"{"detail": "inappropriate content"}"#)
        .await;

    let err = fixture.client().analyze(VIDEO_URL).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(err.message(), "inappropriate content");
}

#[tokio::test]
async fn analyze_400_without_detail_uses_fallback() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error("/api/v1/analyze/", 400, "bad").await;

    let err = fixture.client().analyze(VIDEO_URL).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(
        err.message(),
        "Invalid video URL or content unavailable. Please try a different video."
    );
}

#[tokio::test]
async fn analyze_500_with_unparseable_body_uses_generic_message() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error("/api/v1/analyze/", 500, "<html>Internal Server Error</html>")
        .await;

    let err = fixture.client().analyze(VIDEO_URL).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ServerError);
    assert_eq!(err.message(), "Server error. Please try again later.");
    assert_eq!(err.status, Some(500));
}

#[tokio::test]
async fn analyze_500_with_detail_passes_it_through() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error(
            "/api/v1/analyze/",
            502,
            r#"{"detail":"Failed to download video: private account"}"#,
        )
        .await;

    let err = fixture.client().analyze(VIDEO_URL).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ServerError);
    assert_eq!(err.message(), "Failed to download video: private account");
}

#[tokio::test]
async fn analyze_other_status_is_unknown_with_status_and_body() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error("/api/v1/analyze/", 422, r#"{"detail":"missing url"}"#)
        .await;

    let err = fixture.client().analyze(VIDEO_URL).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unknown);
    assert_eq!(
        err.message(),
        r#"Request failed with status 422: {"detail":"missing url"}"#
    );
}

#[tokio::test]
async fn analyze_success_with_bad_shape_is_unknown() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_post("/api/v1/analyze/", json!({"url": VIDEO_URL}), 200, r#"{"ok":true}"#)
        .await;

    let err = fixture.client().analyze(VIDEO_URL).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unknown);
    assert!(err.message().starts_with("Invalid response from server"));
    assert_eq!(err.status, Some(200));
}

#[tokio::test]
async fn analyze_connection_refused_is_network_error() {
    let client = AnalysisClient::builder()
        .base_url(unreachable_base_url())
        .build()
        .unwrap();

    let err = client.analyze(VIDEO_URL).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NetworkError);
    assert_eq!(err.message(), NETWORK_ERROR_MESSAGE);
    assert!(err.status.is_none());
    assert_eq!(err.context.operation.as_deref(), Some("analyze"));
}

#[tokio::test]
async fn analyze_sends_unchecked_input_and_maps_server_rejection() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_post(
            "/api/v1/analyze/",
            json!({"url": "not a link"}),
            400,
            r#"{"detail":"Unsupported URL"}"#,
        )
        .await;

    let err = fixture.client().analyze("not a link").await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(err.message(), "Unsupported URL");
}

#[tokio::test]
async fn health_is_served_from_root_not_api_prefix() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"healthy"}"#)
        .expect(1)
        .create_async()
        .await;

    let health = fixture.client().check_health().await.unwrap();

    mock.assert_async().await;
    assert!(health.is_healthy());
}

#[tokio::test]
async fn health_accepts_server_defined_body() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": true, "db": "up"}"#)
        .expect(1)
        .create_async()
        .await;

    let health = fixture.client().check_health().await.unwrap();

    mock.assert_async().await;
    assert!(health.is_healthy());
    assert_eq!(health.body()["db"], "up");
}

#[tokio::test]
async fn health_failure_statuses_are_classified() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("GET", "/health")
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let err = fixture.client().check_health().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ServerError);
    assert_eq!(err.context.operation.as_deref(), Some("health"));
}

#[tokio::test]
async fn health_connection_refused_is_network_error() {
    let client = AnalysisClient::builder()
        .base_url(unreachable_base_url())
        .build()
        .unwrap();

    let err = client.check_health().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NetworkError);
}
