//! Fastly API access configuration.
//!
//! The token and base URL can be set directly or picked up from the
//! environment (`FASTLY_API_TOKEN`, `FASTLY_API_BASE`).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default Fastly API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.fastly.com";

/// Fastly API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastlyConfig {
    /// API token for Fastly authentication
    pub api_token: Option<String>,

    /// API base URL (default: https://api.fastly.com)
    pub api_base: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for FastlyConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            api_base: None,
            timeout: default_timeout(),
        }
    }
}

impl FastlyConfig {
    /// Get the API token with environment variable fallback
    pub fn get_api_token(&self) -> Option<String> {
        self.api_token
            .clone()
            .or_else(|| std::env::var("FASTLY_API_TOKEN").ok())
    }

    /// Get the API base with environment variable fallback
    pub fn get_api_base(&self) -> String {
        self.api_base
            .clone()
            .or_else(|| std::env::var("FASTLY_API_BASE").ok())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    /// Validate the configuration. Must pass before any request is made.
    pub fn validate(&self) -> Result<()> {
        if self.get_api_token().is_none() {
            return Err(Error::Config(
                "Fastly API token not provided and FASTLY_API_TOKEN environment variable not set"
                    .to_string(),
            ));
        }

        if self.timeout == 0 {
            return Err(Error::Config("Timeout must be greater than 0".to_string()));
        }

        Ok(())
    }
}

fn default_timeout() -> u64 {
    30
}
