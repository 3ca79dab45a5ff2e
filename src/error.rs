//! 客户端错误：将传输失败与非 2xx 响应归一化为统一的错误分类。
//!
//! Normalized client errors.
//!
//! Every failure path of [`AnalysisClient`](crate::AnalysisClient) ends in a
//! [`ClientError`]. The server is inconsistent about its error bodies (JSON
//! `{detail}` on some endpoints, raw text on others); that inconsistency is
//! resolved in `client::error_classification` and never leaks past this type.

use std::fmt;
use thiserror::Error;

/// Structured context attached to a [`ClientError`] for logging and debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Logical operation that failed (e.g. "analyze", "chat").
    pub operation: Option<String>,
    /// Full URL the request was sent to.
    pub endpoint: Option<String>,
    /// Low-level detail that is useful in logs but not shown to users.
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref op) = ctx.operation {
        parts.push(format!("operation: {}", op));
    }
    if let Some(ref endpoint) = ctx.endpoint {
        parts.push(format!("endpoint: {}", endpoint));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

/// Classification of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// HTTP 404: the endpoint (or the referenced analysis) could not be reached.
    NotFound,
    /// HTTP 400: the server rejected caller-supplied input.
    BadRequest,
    /// HTTP 5xx: the server failed while handling the request.
    ServerError,
    /// The transport could not complete the exchange (DNS, refused, reset).
    NetworkError,
    /// Any other non-2xx status, or a 2xx body that could not be decoded.
    Unknown,
}

impl ErrorKind {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::BadRequest => "bad_request",
            Self::ServerError => "server_error",
            Self::NetworkError => "network_error",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized failure returned to callers.
///
/// `Display` renders only the message so a UI can show `err.to_string()`
/// directly; use [`ClientError::describe`] for the full diagnostic form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClientError {
    pub kind: ErrorKind,
    pub message: String,
    /// HTTP status, when a response was received at all.
    pub status: Option<u16>,
    pub context: ErrorContext,
}

impl ClientError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            context: ErrorContext::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServerError, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NetworkError, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Only transport failures are worth repeating; every HTTP answer is final.
    pub fn is_retryable(&self) -> bool {
        self.kind == ErrorKind::NetworkError
    }

    /// Diagnostic rendering with kind, status and context.
    pub fn describe(&self) -> String {
        let status = self
            .status
            .map(|s| format!(" [HTTP {}]", s))
            .unwrap_or_default();
        format!(
            "{}{}: {}{}",
            self.kind,
            status,
            self.message,
            format_context(&self.context)
        )
    }
}
