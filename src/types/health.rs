//! Health check payload.

use serde::{Deserialize, Serialize};

/// Response of `GET /health`.
///
/// The body is whatever JSON the server chooses to send and is kept as-is.
/// A string `status` field, when present, is exposed through [`status`](Self::status).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthStatus(pub serde_json::Value);

impl HealthStatus {
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(serde_json::Value::as_str)
    }

    /// Reachability is the real signal; a reported status is only trusted
    /// when it is a recognised string or boolean.
    pub fn is_healthy(&self) -> bool {
        match self.0.get("status") {
            Some(serde_json::Value::String(s)) => {
                s.eq_ignore_ascii_case("healthy") || s.eq_ignore_ascii_case("ok")
            }
            Some(serde_json::Value::Bool(b)) => *b,
            Some(_) => false,
            None => true,
        }
    }

    pub fn body(&self) -> &serde_json::Value {
        &self.0
    }
}
