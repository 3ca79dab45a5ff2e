//! 视频链接校验：在调用 analyze 之前由调用方执行的 URL 合理性检查。
//!
//! Caller-side URL checks.
//!
//! [`AnalysisClient::analyze`](crate::AnalysisClient::analyze) sends whatever
//! it is given; screens run these checks first so obviously broken input
//! never reaches the server.

use crate::error::{ClientError, ErrorContext};
use url::Url;

/// Message shown when a link is blank or not a usable URL.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid video URL";

/// Parse and check that `input` looks like a fetchable video link.
///
/// Requires an `http`/`https` scheme and a host that is either `localhost`
/// or contains a dot. Surrounding whitespace is ignored.
pub fn validate_video_url(input: &str) -> Result<Url, ClientError> {
    let invalid = || {
        ClientError::bad_request(INVALID_URL_MESSAGE).with_context(
            ErrorContext::new()
                .with_operation("validate_video_url")
                .with_details(input.to_string()),
        )
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }
    let url = Url::parse(trimmed).map_err(|_| invalid())?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid());
    }
    match url.host_str() {
        Some(host) if host == "localhost" || (host.contains('.') && !host.ends_with('.')) => {
            Ok(url)
        }
        _ => Err(invalid()),
    }
}

pub fn is_plausible_video_url(input: &str) -> bool {
    validate_video_url(input).is_ok()
}
