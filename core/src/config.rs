//! Client configuration.

use std::time::Duration;

use crate::error::ConfigError;

pub const ENV_API_URL: &str = "TODOLIST_API_URL";
pub const ENV_API_KEY: &str = "TODOLIST_API_KEY";
pub const ENV_TIMEOUT_MS: &str = "TODOLIST_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Sent as the `API-KEY` header on every request when set.
    pub api_key: Option<String>,
    /// Applied by the transport; the service layer enforces no timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Read overrides from the process environment, keeping defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_API_URL) {
            config.base_url = url;
        }
        config.api_key = lookup(ENV_API_KEY).filter(|k| !k.is_empty());
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let ms = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                name: ENV_TIMEOUT_MS,
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_millis(ms);
        }
        Ok(config)
    }
}
