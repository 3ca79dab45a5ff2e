//! 客户端配置：显式注入的服务地址、传输超时与重试策略。
//!
//! Client configuration.
//!
//! The base URL is an explicit value handed to the client at construction.
//! Platform-dependent defaults (emulator loopback vs. localhost) are resolved
//! here, outside the client, and can be overridden from the environment:
//!
//! - `UNREEL_API_BASE_URL`: base URL including the `/api/v1` prefix
//! - `UNREEL_HTTP_TIMEOUT_SECS`: optional transport timeout (unset = transport default)
//! - `UNREEL_MAX_RETRIES`: optional bounded retry on network errors (unset = 0)

use crate::client::policy::RetryPolicy;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Path prefix under which the analysis API is mounted.
pub const API_PREFIX: &str = "/api/v1";

pub const ENV_BASE_URL: &str = "UNREEL_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "UNREEL_HTTP_TIMEOUT_SECS";
pub const ENV_MAX_RETRIES: &str = "UNREEL_MAX_RETRIES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: String, value: String },

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

/// Where the app runs; decides how the development backend is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Android emulator: the host machine is `10.0.2.2`.
    Android,
    Ios,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Desktop
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Platform::Android => "http://10.0.2.2:3000/api/v1",
            Platform::Ios | Platform::Desktop => "http://localhost:3000/api/v1",
        }
    }
}

/// Configuration injected into [`AnalysisClient`](crate::AnalysisClient).
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    base_url: String,
    /// `None` leaves timeouts to the transport.
    pub timeout: Option<Duration>,
    pub retry: RetryPolicy,
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref())?,
            timeout: None,
            retry: RetryPolicy::none(),
        })
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self {
            base_url: platform.default_base_url().to_string(),
            timeout: None,
            retry: RetryPolicy::none(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            Some(url) => Self::new(url)?,
            None => Self::for_platform(Platform::current()),
        };

        if let Some(secs) = parse_var::<u64, _>(&lookup, ENV_TIMEOUT_SECS)? {
            config.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(retries) = parse_var::<u32, _>(&lookup, ENV_MAX_RETRIES)? {
            config.retry = RetryPolicy::network_only(retries);
        }
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Base URL of the API, e.g. `http://localhost:3000/api/v1`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Server root without the API prefix; `/health` lives here.
    pub fn root_url(&self) -> &str {
        self.base_url
            .strip_suffix(API_PREFIX)
            .unwrap_or(&self.base_url)
    }

    /// Join a path onto the base URL. `path` must start with `/`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
        url: trimmed.to_string(),
        reason: reason.to_string(),
    };

    let parsed = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(invalid("scheme must be http or https"));
    }
    if parsed.host_str().map(str::is_empty).unwrap_or(true) {
        return Err(invalid("missing host"));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn parse_var<T, F>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map(Some).map_err(|_| ConfigError::InvalidEnv {
                var: var.to_string(),
                value,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:3000/api/v1/").unwrap();
        assert_eq!(config.base_url(), "http://localhost:3000/api/v1");
        assert_eq!(config.api_url("/chat/"), "http://localhost:3000/api/v1/chat/");
    }

    #[test]
    fn root_url_drops_api_prefix() {
        let config = ClientConfig::new("http://10.0.2.2:3000/api/v1").unwrap();
        assert_eq!(config.root_url(), "http://10.0.2.2:3000");

        let bare = ClientConfig::new("http://example.com").unwrap();
        assert_eq!(bare.root_url(), "http://example.com");
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            ClientConfig::new("ftp://example.com/api/v1"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(ClientConfig::new("not a url").is_err());
    }

    #[test]
    fn platform_defaults() {
        assert_eq!(
            ClientConfig::for_platform(Platform::Android).base_url(),
            "http://10.0.2.2:3000/api/v1"
        );
        assert_eq!(
            ClientConfig::for_platform(Platform::Ios).base_url(),
            "http://localhost:3000/api/v1"
        );
    }

    #[test]
    fn lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "https://api.example.com/api/v1"),
            (ENV_TIMEOUT_SECS, "15"),
            (ENV_MAX_RETRIES, "2"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "https://api.example.com/api/v1");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.retry.max_retries, 2);
    }

    #[test]
    fn empty_lookup_uses_platform_default_and_no_timeout() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url(), Platform::current().default_base_url());
        assert!(config.timeout.is_none());
        assert_eq!(config.retry.max_retries, 0);
    }

    #[test]
    fn bad_env_value_is_reported() {
        let err = ClientConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { ref var, .. } if var == ENV_TIMEOUT_SECS));
    }
}
