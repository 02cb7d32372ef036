//! Starknet node connection settings.

use serde::Deserialize;

use crate::domain::constants::DEFAULT_RPC_URL;

/// JSON-RPC node settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StarknetConfig {
    /// Node URL.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Request timeout in milliseconds. Unbounded when unset.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

impl Default for StarknetConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            timeout_ms: None,
        }
    }
}
