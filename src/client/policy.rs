//! 重试策略：仅对网络错误进行有限次指数退避重试，默认关闭。
//!
//! Retry policy.
//!
//! The default client makes exactly one attempt per call. A non-zero
//! `max_retries` enables bounded exponential backoff for transport failures
//! only; any HTTP answer (including 5xx) is final.

use crate::error::ClientError;
use std::time::Duration;

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    Retry { delay: Duration },
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Single attempt, no retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Retry network errors up to `max_retries` times, 250ms doubling up to 4s.
    pub fn network_only(max_retries: u32) -> Self {
        Self {
            max_retries,
            min_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(4),
        }
    }

    pub fn with_delays(mut self, min_delay: Duration, max_delay: Duration) -> Self {
        self.min_delay = min_delay;
        self.max_delay = max_delay.max(min_delay);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.max_retries > 0
    }

    fn backoff_delay(&self, attempt: u32) -> Duration {
        // min_delay * 2^attempt, capped
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.min_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }

    /// `attempt` is 0-based: the first failure is attempt 0.
    pub(crate) fn decide(&self, err: &ClientError, attempt: u32) -> Decision {
        if err.is_retryable() && attempt < self.max_retries {
            Decision::Retry {
                delay: self.backoff_delay(attempt),
            }
        } else {
            Decision::Fail
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}
