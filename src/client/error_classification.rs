//! Error classification logic
//!
//! Maps a non-2xx status plus its body onto the [`ClientError`] taxonomy:
//!
//! | Status | Kind | Message |
//! |--------|------|---------|
//! | 404 | NotFound | fixed per operation |
//! | 400 | BadRequest | JSON `detail` (chat: raw body), else fixed fallback |
//! | >= 500 | ServerError | JSON `detail`, else fixed fallback |
//! | other | Unknown | `"{prefix} with status {code}: {body}"` |

use super::endpoint::{BadRequestSource, ErrorMessages, NETWORK_ERROR_MESSAGE};
use crate::error::ClientError;

/// Extract a usable `detail` field from a JSON error body.
pub(crate) fn detail_from_body(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    match json.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn classify_status(status: u16, body: &str, messages: &ErrorMessages) -> ClientError {
    let err = match status {
        404 => ClientError::not_found(messages.not_found),
        400 => {
            let message = match messages.bad_request_source {
                BadRequestSource::Detail => detail_from_body(body),
                BadRequestSource::RawText => {
                    Some(body.to_string()).filter(|b| !b.is_empty())
                }
            };
            ClientError::bad_request(
                message.unwrap_or_else(|| messages.bad_request_fallback.to_string()),
            )
        }
        s if s >= 500 => ClientError::server(
            detail_from_body(body).unwrap_or_else(|| messages.server_fallback.to_string()),
        ),
        _ => ClientError::unknown(format!(
            "{} with status {}: {}",
            messages.unknown_prefix, status, body
        )),
    };
    err.with_status(status)
}

/// Transport-level failure (DNS, refused, reset, body read aborted).
pub(crate) fn classify_transport(err: &reqwest::Error) -> ClientError {
    let mut client_err = ClientError::network(NETWORK_ERROR_MESSAGE);
    if let Some(status) = err.status() {
        client_err = client_err.with_status(status.as_u16());
    }
    client_err
}

/// A 2xx body that does not match the expected shape.
pub(crate) fn classify_decode(err: &serde_json::Error) -> ClientError {
    ClientError::unknown(format!("Invalid response from server: {}", err))
}
