//! # unreel-client
//!
//! 视频分析服务的强类型客户端：提交视频链接、获取分析结果、就分析内容对话、翻译转录文本。
//!
//! Typed client for the UnReel video analysis API.
//!
//! ## Overview
//!
//! The backend analyzes a video link (summary, key topics, mentioned
//! resources, transcript) and lets the user chat about the result or
//! translate the transcript. This crate is the boundary to that service:
//! it builds the four requests, decodes the success payloads, and classifies
//! every failure into a single [`ClientError`] taxonomy.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`AnalysisClient::check_health`] | `GET <root>/health` |
//! | [`AnalysisClient::analyze`] | `POST <base>/analyze/` |
//! | [`AnalysisClient::chat`] | `POST <base>/chat/` |
//! | [`AnalysisClient::translate_transcript`] | `POST <base>/analyze/{id}/translate` |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use unreel_client::{AnalysisClient, ErrorKind};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AnalysisClient::builder()
//!         .base_url("http://localhost:3000/api/v1")
//!         .build()?;
//!
//!     match client.analyze("https://example.com/video.mp4").await {
//!         Ok(result) => println!("{}: {}", result.title(), result.summary()),
//!         Err(e) if e.kind() == ErrorKind::NetworkError => eprintln!("offline: {e}"),
//!         Err(e) => eprintln!("{e}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | HTTP client, builder, retry policy |
//! | [`config`] | Injected configuration and platform defaults |
//! | [`error`] | [`ClientError`] and [`ErrorKind`] |
//! | [`types`] | Wire types |
//! | [`api`] | [`AnalysisApi`] trait |
//! | [`session`] | Chat history and transcript language selection |
//! | [`validation`] | Caller-side URL checks |

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod types;
pub mod validation;

pub use api::AnalysisApi;
pub use client::{AnalysisClient, AnalysisClientBuilder, RetryPolicy};
pub use config::{ClientConfig, ConfigError, Platform};
pub use error::{ClientError, ErrorContext, ErrorKind};
pub use session::{ChatSession, TranscriptSelector};
pub use types::{
    AnalysisResult, ChatReply, ChatTurn, HealthStatus, Sender, TranslationResult,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, ClientError>;
