//! Client configuration.

use std::time::Duration;

use voxelplay_types::models::{BotConfig, RetryPolicy, DEFAULT_BASE_URL};

/// Android Chrome user agent expected by the game's web client.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/130.0.0.0 Mobile Safari/537.36";

/// Configuration for the VoxelPlay client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the game API, without trailing path.
    pub base_url: String,
    /// Budget for one call, covering every attempt and backoff sleep.
    pub timeout: Duration,
    /// Retry configuration for transient errors.
    pub retry: RetryPolicy,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_bot_config(config: &BotConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.request_timeout(),
            retry: config.retry.clone(),
            ..Self::default()
        }
    }

    /// Origin header value: the base URL without trailing slashes.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.origin(), path)
    }
}
