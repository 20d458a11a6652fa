// GUI configuration
// Chat endpoint settings read from environment variables with defaults

use std::env;
use std::time::Duration;

/// Default chat endpoint served by the backend crate
pub const DEFAULT_CHAT_API_URL: &str = "http://127.0.0.1:5000/chat";

/// Default request timeout in seconds
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Full URL of the `/chat` endpoint
    pub chat_api_url: String,
    /// Request timeout in seconds (0 = no timeout)
    pub chat_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat_api_url: DEFAULT_CHAT_API_URL.to_string(),
            chat_timeout_secs: DEFAULT_CHAT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            chat_api_url: env::var("CHAT_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CHAT_API_URL.to_string()),
            chat_timeout_secs: env::var("CHAT_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_CHAT_TIMEOUT_SECS),
        }
    }

    /// Request timeout, or `None` when disabled
    pub fn chat_timeout(&self) -> Option<Duration> {
        (self.chat_timeout_secs > 0).then(|| Duration::from_secs(self.chat_timeout_secs))
    }
}
