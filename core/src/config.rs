//! Client configuration.
//!
//! Built once at start-up and never mutated. `from_env` layers environment
//! variables (`ACTIVECAMPAIGN_BASE_URL`, `ACTIVECAMPAIGN_API_TOKEN`,
//! `ACTIVECAMPAIGN_TIMEOUT_MS`) over the defaults.

use std::fmt;
use std::time::Duration;

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::ActiveCampaignError;

/// Per-request timeout used unless overridden.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

const ENV_PREFIX: &str = "ACTIVECAMPAIGN_";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    base_url: String,
    api_token: String,
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Load from `ACTIVECAMPAIGN_*` environment variables.
    pub fn from_env() -> Result<Self, ActiveCampaignError> {
        Self::from_figment(
            Figment::new()
                .merge(Serialized::default("timeout_ms", DEFAULT_TIMEOUT_MS))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ActiveCampaignError> {
        let config: ClientConfig = figment
            .extract()
            .map_err(|e| ActiveCampaignError::validation(format!("invalid client configuration: {e}")))?;
        let config = Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ..config
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ActiveCampaignError> {
        if self.base_url.trim().is_empty() {
            return Err(ActiveCampaignError::validation("base_url must not be empty"));
        }
        if self.api_token.trim().is_empty() {
            return Err(ActiveCampaignError::validation("api_token must not be empty"));
        }
        if self.timeout_ms == 0 {
            return Err(ActiveCampaignError::validation("timeout_ms must be greater than zero"));
        }
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

// Keeps the token out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
