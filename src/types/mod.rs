//! 类型模块：分析服务请求与响应的强类型表示。
//!
//! # Types Module
//!
//! Strongly-typed representations of the analysis service wire contract.
//! Field names follow the server's camelCase JSON; the one snake_case field
//! (`target_language`) is renamed explicitly.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`analysis`] | Analyze request and the normalized analysis result |
//! | [`chat`] | Chat request/reply and in-memory chat turns |
//! | [`translation`] | Transcript translation request and result |
//! | [`health`] | Health check payload |

pub mod analysis;
pub mod chat;
pub mod health;
pub mod translation;

pub use analysis::{
    AnalysisContent, AnalysisMetadata, AnalysisRequest, AnalysisResult, MentionedResource,
};
pub use chat::{ChatReply, ChatRequest, ChatTurn, Sender};
pub use health::HealthStatus;
pub use translation::{TranslationRequest, TranslationResult};
