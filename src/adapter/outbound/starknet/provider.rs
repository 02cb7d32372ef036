//! Starknet JSON-RPC provider.
//!
//! Implements [`ContractReader`] with `starknet_call` against the latest
//! block. Entrypoint names are hashed to selectors locally, so no ABI is
//! needed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use alloy_primitives::{keccak256, U256};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::settings::StarknetConfig;
use crate::domain::address::{felt_to_hex, parse_felt};
use crate::domain::call::Call;
use crate::error::{Error, Result};
use crate::port::ContractReader;

/// Starknet keccak keeps the low 250 bits.
const SELECTOR_MASK: U256 = U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, (1 << 58) - 1]);

/// Selector for an entrypoint name.
#[must_use]
pub fn selector(name: &str) -> U256 {
    U256::from_be_bytes(keccak256(name.as_bytes()).0) & SELECTOR_MASK
}

#[derive(Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Serialize)]
struct CallParams {
    request: FunctionCall,
    block_id: &'static str,
}

#[derive(Serialize)]
struct FunctionCall {
    contract_address: String,
    entry_point_selector: String,
    calldata: Vec<String>,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

/// Read-only Starknet node client.
pub struct RpcProvider {
    http: HttpClient,
    url: String,
    next_id: AtomicU64,
}

impl RpcProvider {
    /// Provider without a request timeout.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            url: url.into(),
            next_id: AtomicU64::new(1),
        }
    }

    #[must_use]
    pub fn from_config(config: &StarknetConfig) -> Self {
        let mut builder = HttpClient::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let http = builder.build().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        });

        Self {
            http,
            url: config.rpc_url.clone(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Node URL this provider talks to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn function_call(call: &Call) -> Result<FunctionCall> {
        let contract_address = felt_to_hex(parse_felt(&call.contract_address)?);
        let calldata = call
            .calldata
            .iter()
            .map(|felt| parse_felt(felt).map(felt_to_hex))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(FunctionCall {
            contract_address,
            entry_point_selector: felt_to_hex(selector(&call.entrypoint)),
            calldata,
        })
    }
}

#[async_trait]
impl ContractReader for RpcProvider {
    async fn call(&self, call: &Call) -> Result<Vec<String>> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method: "starknet_call",
            params: CallParams {
                request: Self::function_call(call)?,
                block_id: "latest",
            },
        };

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body: RpcResponse<Vec<String>> = response.json().await?;

        if let Some(error) = body.error {
            debug!(
                entrypoint = %call.entrypoint,
                code = error.code,
                message = %error.message,
                data = ?error.data,
                "starknet_call rejected"
            );
            return Err(Error::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        body.result
            .ok_or_else(|| Error::Decode("starknet_call response has no result".into()))
    }

    fn name(&self) -> &'static str {
        "starknet-rpc"
    }
}

impl std::fmt::Debug for RpcProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcProvider").field("url", &self.url).finish()
    }
}
