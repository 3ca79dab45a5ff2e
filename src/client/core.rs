use crate::client::endpoint::{self, Operation};
use crate::client::error_classification::{classify_decode, classify_status, classify_transport};
use crate::client::policy::Decision;
use crate::config::{ClientConfig, ConfigError};
use crate::error::ErrorContext;
use crate::types::{
    AnalysisRequest, AnalysisResult, ChatReply, ChatRequest, HealthStatus, TranslationRequest,
    TranslationResult,
};
use crate::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Client for the video analysis API.
///
/// Cheap to clone; clones share one connection pool. Each operation is a
/// single request whose outcome is either the decoded payload or a
/// classified [`ClientError`](crate::ClientError). Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> std::result::Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Use a caller-provided `reqwest::Client` (shared pools, custom TLS).
    /// `config.timeout` is ignored in favour of the client's own settings.
    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn builder() -> crate::client::builder::AnalysisClientBuilder {
        crate::client::builder::AnalysisClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET <root>/health`.
    pub async fn check_health(&self) -> Result<HealthStatus> {
        let url = format!("{}{}", self.config.root_url(), endpoint::HEALTH_PATH);
        self.execute::<(), _>(Operation::Health, Method::GET, url, None)
            .await
    }

    /// `POST <base>/analyze/` with `{url}`.
    ///
    /// The URL is sent as given. Callers check it first with
    /// [`crate::validation::validate_video_url`].
    pub async fn analyze(&self, video_url: &str) -> Result<AnalysisResult> {
        let body = AnalysisRequest::new(video_url);
        let url = self.config.api_url(endpoint::ANALYZE_PATH);
        self.execute(Operation::Analyze, Method::POST, url, Some(&body))
            .await
    }

    /// `POST <base>/chat/` with `{analysisId, message}`.
    pub async fn chat(&self, analysis_id: &str, message: &str) -> Result<ChatReply> {
        let body = ChatRequest {
            analysis_id: analysis_id.to_string(),
            message: message.to_string(),
        };
        let url = self.config.api_url(endpoint::CHAT_PATH);
        self.execute(Operation::Chat, Method::POST, url, Some(&body))
            .await
    }

    /// `POST <base>/analyze/{id}/translate` with `{target_language}`.
    pub async fn translate_transcript(
        &self,
        analysis_id: &str,
        target_language: &str,
    ) -> Result<TranslationResult> {
        let body = TranslationRequest {
            target_language: target_language.to_string(),
        };
        let url = self.config.api_url(&endpoint::translate_path(analysis_id));
        self.execute(Operation::Translate, Method::POST, url, Some(&body))
            .await
    }

    async fn execute<B, T>(
        &self,
        operation: Operation,
        method: Method,
        url: String,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let policy = self.config.retry;
        let mut attempt = 0u32;
        loop {
            match self
                .execute_once(operation, method.clone(), &url, body)
                .await
            {
                Ok(value) => return Ok(value),
                Err(err) => match policy.decide(&err, attempt) {
                    Decision::Retry { delay } => {
                        warn!(
                            operation = operation.name(),
                            endpoint = url.as_str(),
                            attempt = attempt + 1,
                            max_retries = policy.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "retrying after network error"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                    Decision::Fail => return Err(err),
                },
            }
        }
    }

    /// One HTTP exchange, no retry.
    async fn execute_once<B, T>(
        &self,
        operation: Operation,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let context = ErrorContext::new()
            .with_operation(operation.name())
            .with_endpoint(url);
        let start = Instant::now();
        debug!(operation = operation.name(), endpoint = url, "sending request");

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(
                operation = operation.name(),
                endpoint = url,
                error = %e,
                "request did not complete"
            );
            classify_transport(&e).with_context(context.clone().with_details(e.to_string()))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            classify_transport(&e).with_context(context.clone().with_details(e.to_string()))
        })?;

        if !status.is_success() {
            let err = classify_status(status.as_u16(), &text, &operation.messages())
                .with_context(context);
            info!(
                operation = operation.name(),
                endpoint = url,
                http_status = status.as_u16(),
                error_kind = err.kind.name(),
                duration_ms = start.elapsed().as_millis() as u64,
                "request failed"
            );
            return Err(err);
        }

        debug!(
            operation = operation.name(),
            http_status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "request succeeded"
        );

        serde_json::from_str(&text).map_err(|e| {
            classify_decode(&e)
                .with_status(status.as_u16())
                .with_context(context)
        })
    }
}
