//! Endpoint table: paths and per-operation error wording.

/// Message shown when the transport could not complete the exchange.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and make sure the backend is running.";

/// Message for a 404 on the analyze/chat endpoints.
pub const SERVER_UNREACHABLE_MESSAGE: &str =
    "Unable to connect to the server. Please make sure the backend is running.";

/// Where the 400 message comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BadRequestSource {
    /// `detail` field of a JSON body.
    Detail,
    /// The body text verbatim (chat endpoint).
    RawText,
}

/// Fixed strings and body-parsing rules for one operation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ErrorMessages {
    pub not_found: &'static str,
    pub bad_request_source: BadRequestSource,
    pub bad_request_fallback: &'static str,
    pub server_fallback: &'static str,
    /// Prefix of the Unknown message, followed by ` with status {code}: {body}`.
    pub unknown_prefix: &'static str,
}

/// The four operations the client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Health,
    Analyze,
    Chat,
    Translate,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Health => "health",
            Operation::Analyze => "analyze",
            Operation::Chat => "chat",
            Operation::Translate => "translate",
        }
    }

    pub fn messages(&self) -> ErrorMessages {
        match self {
            Operation::Health | Operation::Analyze => ErrorMessages {
                not_found: SERVER_UNREACHABLE_MESSAGE,
                bad_request_source: BadRequestSource::Detail,
                bad_request_fallback:
                    "Invalid video URL or content unavailable. Please try a different video.",
                server_fallback: "Server error. Please try again later.",
                unknown_prefix: "Request failed",
            },
            Operation::Chat => ErrorMessages {
                not_found: SERVER_UNREACHABLE_MESSAGE,
                bad_request_source: BadRequestSource::RawText,
                bad_request_fallback: "Invalid request. Please check your input and try again.",
                server_fallback: "Server error. Please try again later.",
                unknown_prefix: "Request failed",
            },
            Operation::Translate => ErrorMessages {
                not_found: "Analysis not found. Please make sure the analysis exists.",
                bad_request_source: BadRequestSource::Detail,
                bad_request_fallback:
                    "Invalid translation request. Please check the language selection.",
                server_fallback: "Server error during translation. Please try again later.",
                unknown_prefix: "Translation request failed",
            },
        }
    }
}

pub(crate) const HEALTH_PATH: &str = "/health";
pub(crate) const ANALYZE_PATH: &str = "/analyze/";
pub(crate) const CHAT_PATH: &str = "/chat/";

/// `/analyze/{id}/translate`. The id is percent-encoded as a single segment.
pub(crate) fn translate_path(analysis_id: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(analysis_id.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("/analyze/{}/translate", encoded)
}
