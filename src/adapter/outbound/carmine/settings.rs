//! Carmine backend configuration.

use serde::Deserialize;

use crate::domain::constants::DEFAULT_API_URL;

/// Backend network. Only mainnet is served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
        }
    }
}

/// REST backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CarmineApiConfig {
    /// Backend base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Version segment of versioned endpoints (`/v{version}/...`).
    #[serde(default = "default_api_version")]
    pub version: u32,
    #[serde(default)]
    pub network: Network,
    /// Request timeout in milliseconds. Unbounded when unset.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_api_version() -> u32 {
    1
}

impl Default for CarmineApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            version: default_api_version(),
            network: Network::default(),
            timeout_ms: None,
        }
    }
}
