//! SDK configuration loading and validation.
//!
//! Provides the [`Config`] struct that aggregates node, backend and logging
//! settings. Configuration is loaded from a TOML file; `CARMINE_RPC_URL` and
//! `CARMINE_API_URL` override the endpoint URLs.
//!
//! # Example
//!
//! ```no_run
//! use carmine::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("carmine.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use crate::adapter::outbound::carmine::settings::CarmineApiConfig;
use crate::adapter::outbound::starknet::settings::StarknetConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding [`StarknetConfig::rpc_url`].
pub const RPC_URL_ENV: &str = "CARMINE_RPC_URL";
/// Environment variable overriding [`CarmineApiConfig::api_url`].
pub const API_URL_ENV: &str = "CARMINE_API_URL";

/// SDK configuration.
///
/// Every section is optional; an empty file yields the mainnet defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Starknet JSON-RPC node.
    #[serde(default)]
    pub starknet: StarknetConfig,

    /// Carmine REST backend.
    #[serde(default)]
    pub api: CarmineApiConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Defaults with optional endpoint overrides; unset URLs keep their
    /// defaults.
    #[must_use]
    pub fn with_urls(rpc_url: Option<String>, api_url: Option<String>) -> Self {
        let mut config = Self::default();
        config.apply_overrides(rpc_url, api_url);
        config
    }

    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Defaults plus environment overrides, for running without a file.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var(RPC_URL_ENV).ok(),
            std::env::var(API_URL_ENV).ok(),
        );
    }

    /// Replace the endpoint URLs that are `Some` and non-blank.
    pub fn apply_overrides(&mut self, rpc_url: Option<String>, api_url: Option<String>) {
        if let Some(url) = rpc_url.filter(|u| !u.trim().is_empty()) {
            self.starknet.rpc_url = url;
        }
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api.api_url = url;
        }
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        validate_url("rpc_url", &self.starknet.rpc_url)?;
        validate_url("api_url", &self.api.api_url)?;

        if self.api.version == 0 {
            return Err(ConfigError::InvalidValue {
                field: "version",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.starknet.timeout_ms == Some(0) || self.api.timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0 when set".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("unknown log format '{}'", self.logging.format),
            }
            .into());
        }

        Ok(())
    }

    /// Install the tracing subscriber described by [`Self::logging`].
    pub fn init_logging(&self) {
        self.logging.init();
    }

    #[must_use]
    pub fn rpc_url(&self) -> &str {
        &self.starknet.rpc_url
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api.api_url
    }
}

#[allow(clippy::result_large_err)]
fn validate_url(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    Ok(())
}
