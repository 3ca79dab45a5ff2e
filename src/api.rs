//! The analysis API as a trait, so caller-side state can run against fakes.

use crate::client::core::AnalysisClient;
use crate::types::{AnalysisResult, ChatReply, HealthStatus, TranslationResult};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn check_health(&self) -> Result<HealthStatus>;

    async fn analyze(&self, video_url: &str) -> Result<AnalysisResult>;

    async fn chat(&self, analysis_id: &str, message: &str) -> Result<ChatReply>;

    async fn translate_transcript(
        &self,
        analysis_id: &str,
        target_language: &str,
    ) -> Result<TranslationResult>;
}

#[async_trait]
impl AnalysisApi for AnalysisClient {
    async fn check_health(&self) -> Result<HealthStatus> {
        AnalysisClient::check_health(self).await
    }

    async fn analyze(&self, video_url: &str) -> Result<AnalysisResult> {
        AnalysisClient::analyze(self, video_url).await
    }

    async fn chat(&self, analysis_id: &str, message: &str) -> Result<ChatReply> {
        AnalysisClient::chat(self, analysis_id, message).await
    }

    async fn translate_transcript(
        &self,
        analysis_id: &str,
        target_language: &str,
    ) -> Result<TranslationResult> {
        AnalysisClient::translate_transcript(self, analysis_id, target_language).await
    }
}
