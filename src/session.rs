//! 会话状态：聊天记录与转录语言选择等调用方内存状态。
//!
//! Caller-side state driven through [`AnalysisApi`](crate::api::AnalysisApi).
//! Nothing here is persisted; a session lives as long as its screen.

pub mod chat;
pub mod transcript;

pub use chat::ChatSession;
pub use transcript::TranscriptSelector;
