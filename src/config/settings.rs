//! Client configuration settings
//!
//! Defines the configuration structure and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Base URL of the production Keybase REST API
pub const DEFAULT_BASE_URL: &str = "https://keybase.io/_/api/1.0";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT: u64 = 30;

/// Client configuration
///
/// The base URL is configuration rather than a hardcoded constant so tests
/// can point the client at a local mock server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// API base URL, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Settings {
    /// Create a new configuration instance from the environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            base_url: get_env_or_default("KEYBASE_BASE_URL", DEFAULT_BASE_URL),
            timeout: get_env_or_default("KEYBASE_TIMEOUT", "30")
                .parse()
                .context("Invalid timeout value")?,
            user_agent: get_env_or_default("KEYBASE_USER_AGENT", &default_user_agent()),
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("Base URL cannot be empty");
        }

        // Validate URL format
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("Invalid base URL format, should start with 'http'");
        }

        // Validate timeout value
        if self.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

/// Default User-Agent string, derived from the crate version
fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
