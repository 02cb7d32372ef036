//! Contract call descriptors handed to a wallet for signing.

use serde::{Deserialize, Serialize};

/// A single invocation: target contract, entrypoint name and positional
/// arguments as decimal or hex felt strings.
///
/// Serializes to the `{contractAddress, entrypoint, calldata}` shape wallets
/// accept for multicall bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub contract_address: String,
    pub entrypoint: String,
    pub calldata: Vec<String>,
}

impl Call {
    /// Create a call descriptor.
    pub fn new(
        contract_address: impl Into<String>,
        entrypoint: impl Into<String>,
        calldata: Vec<String>,
    ) -> Self {
        Self {
            contract_address: contract_address.into(),
            entrypoint: entrypoint.into(),
            calldata,
        }
    }
}

/// Entrypoint names used by the SDK.
pub mod entrypoint {
    pub const APPROVE: &str = "approve";
    pub const BALANCE_OF: &str = "balance_of";
    pub const DEPOSIT_LIQUIDITY: &str = "deposit_liquidity";
    pub const WITHDRAW_LIQUIDITY: &str = "withdraw_liquidity";
    pub const TRADE_OPEN: &str = "trade_open";
    pub const TRADE_CLOSE: &str = "trade_close";
    pub const TRADE_SETTLE: &str = "trade_settle";
    pub const GET_TOTAL_PREMIA: &str = "get_total_premia";
    pub const GET_UNLOCKED_CAPITAL: &str = "get_unlocked_capital";
    pub const GET_POOL_LOCKED_CAPITAL: &str = "get_pool_locked_capital";
    pub const GET_VALUE_OF_POOL_POSITION: &str = "get_value_of_pool_position";
    pub const GET_ALL_NON_EXPIRED_OPTIONS_WITH_PREMIA: &str =
        "get_all_non_expired_options_with_premia";
}
