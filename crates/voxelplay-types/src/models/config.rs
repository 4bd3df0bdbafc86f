//! Bot configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::endpoint::Endpoint;
use super::mission::MissionRotation;
use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.voxelplay.app";

/// Automatic retry behaviour of the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Backoff factor in milliseconds
    pub backoff_factor_ms: u64,
    /// Upper bound for a single backoff sleep
    pub max_backoff_ms: u64,
    /// Statuses that trigger a retry
    pub retry_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor_ms: 1_000,
            max_backoff_ms: 120_000,
            retry_statuses: vec![500, 502, 503, 504],
        }
    }
}

impl RetryPolicy {
    /// Sleep before 1-based retry `retry`: none for the first, then `factor * 2^(retry-1)`.
    pub fn backoff(&self, retry: u32) -> Duration {
        if retry <= 1 {
            return Duration::ZERO;
        }
        let multiplier = 1_u64.checked_shl(retry - 1).unwrap_or(u64::MAX);
        let millis = self.backoff_factor_ms.saturating_mul(multiplier).min(self.max_backoff_ms);
        Duration::from_millis(millis)
    }

    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_statuses.contains(&status)
    }
}

/// Full bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Game API host
    pub base_url: String,
    /// Token file, one account per line
    pub data_file: PathBuf,
    /// Sleep between batches in seconds
    pub interval_secs: u64,
    /// Pause after each account in milliseconds
    pub account_pause_ms: u64,
    /// Value sent to the progress endpoint
    pub progress_value: u32,
    /// Concurrent calls per account
    pub workers: usize,
    /// Mission ids verified in rotation
    pub mission_ids: MissionRotation,
    /// Time budget for one call including retries
    pub request_timeout_secs: u64,
    pub retry: RetryPolicy,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_file: PathBuf::from("data.txt"),
            interval_secs: 3_600,
            account_pause_ms: 1_000,
            progress_value: 10_000,
            workers: 4,
            mission_ids: MissionRotation::default(),
            request_timeout_secs: 30,
            retry: RetryPolicy::default(),
        }
    }
}

impl BotConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn account_pause(&self) -> Duration {
        Duration::from_millis(self.account_pause_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::invalid("base_url", e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "base_url",
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }
        if self.workers == 0 {
            return Err(ConfigError::invalid("workers", "must be at least 1"));
        }
        if self.workers > Endpoint::CONCURRENT.len() {
            return Err(ConfigError::invalid(
                "workers",
                format!("must be at most {}", Endpoint::CONCURRENT.len()),
            ));
        }
        if self.interval_secs == 0 {
            return Err(ConfigError::invalid("interval_secs", "must be positive"));
        }
        if self.mission_ids.is_empty() {
            return Err(ConfigError::invalid("mission_ids", "must not be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::invalid("request_timeout_secs", "must be positive"));
        }
        Ok(())
    }
}
