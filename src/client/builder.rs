use crate::client::core::AnalysisClient;
use crate::client::policy::RetryPolicy;
use crate::config::{ClientConfig, ConfigError, Platform};
use std::time::Duration;

/// Builder for [`AnalysisClient`].
///
/// Base URL precedence: explicit `base_url` > `platform` default > environment
/// (`UNREEL_API_BASE_URL`, falling back to the current platform's default).
#[derive(Debug, Default)]
pub struct AnalysisClientBuilder {
    base_url: Option<String>,
    platform: Option<Platform>,
    timeout: Option<Duration>,
    retry: Option<RetryPolicy>,
    http_client: Option<reqwest::Client>,
}

impl AnalysisClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL including the API prefix, e.g. `http://localhost:3000/api/v1`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Impose a request timeout. Without it the transport default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<AnalysisClient, ConfigError> {
        let mut config = match (self.base_url, self.platform) {
            (Some(url), _) => ClientConfig::new(url)?,
            (None, Some(platform)) => ClientConfig::for_platform(platform),
            (None, None) => ClientConfig::from_env()?,
        };
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(retry) = self.retry {
            config = config.with_retry(retry);
        }

        match self.http_client {
            Some(http) => Ok(AnalysisClient::with_http_client(http, config)),
            None => AnalysisClient::new(config),
        }
    }
}
