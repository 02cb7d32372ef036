//! REST response payloads.

use std::collections::HashMap;

use alloy_primitives::U256;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::number::{deserialize_optional_u256, deserialize_timestamp, deserialize_u256};
use crate::domain::error::DomainError;
use crate::domain::option::OptionSide;
use crate::domain::pool::{liquidity_pool_by_lp_address, LiquidityPool, OptionType};

/// Raw `/state` payload for one pool.
///
/// Amounts are raw integers of the pool's underlying token, except
/// `balance` and `value` which count LP tokens. `position` is the
/// magnitude of a non-negative fixed-point value.
#[derive(Debug, Clone, Deserialize)]
pub struct StateResponse {
    #[serde(deserialize_with = "deserialize_u256")]
    pub unlocked: U256,
    #[serde(deserialize_with = "deserialize_u256")]
    pub locked: U256,
    #[serde(deserialize_with = "deserialize_u256")]
    pub position: U256,
    #[serde(deserialize_with = "deserialize_u256")]
    pub balance: U256,
    #[serde(deserialize_with = "deserialize_u256")]
    pub value: U256,
    #[serde(deserialize_with = "deserialize_u256")]
    pub value_week_ago: U256,
    #[serde(default, deserialize_with = "deserialize_optional_u256")]
    pub underlying_price: Option<U256>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub block_number: u64,
    pub apy_all_time: f64,
    pub apy_week: f64,
    pub change_all_time: f64,
    pub change_week: f64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date_week_ago: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date_genesis: DateTime<Utc>,
}

/// Spot prices keyed by asset identifier.
pub type LivePrices = HashMap<String, Decimal>;

/// One page of an event feed.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> PaginatedResponse<T> {
    /// Whether pages follow this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) * u64::from(self.per_page) < self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TradeAction {
    TradeOpen,
    TradeClose,
    TradeSettle,
    #[serde(other)]
    Unknown,
}

/// An option trade recorded by the indexer.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeEvent {
    pub transaction_hash: String,
    pub block_number: u64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub caller: String,
    pub action: TradeAction,
    pub lp_address: String,
    pub option_side: u8,
    pub option_type: u8,
    pub maturity: u64,
    /// Strike magnitude in 64.64 fixed point.
    #[serde(deserialize_with = "deserialize_u256")]
    pub strike_price: U256,
    /// Option size in base-token raw units.
    #[serde(deserialize_with = "deserialize_u256")]
    pub tokens_minted: U256,
    /// Premium paid or received in underlying raw units.
    #[serde(deserialize_with = "deserialize_u256")]
    pub capital_transfered: U256,
}

impl TradeEvent {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidOptionSide`] for an unknown code.
    pub fn side(&self) -> Result<OptionSide, DomainError> {
        OptionSide::try_from(u64::from(self.option_side))
    }

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidOptionType`] for an unknown code.
    pub fn option_type(&self) -> Result<OptionType, DomainError> {
        OptionType::try_from(u64::from(self.option_type))
    }

    /// The pool this trade hit, if it is a known pool.
    #[must_use]
    pub fn pool(&self) -> Option<LiquidityPool> {
        liquidity_pool_by_lp_address(&self.lp_address)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LiquidityAction {
    DepositLiquidity,
    WithdrawLiquidity,
    #[serde(other)]
    Unknown,
}

/// A deposit into or withdrawal from a pool.
#[derive(Debug, Clone, Deserialize)]
pub struct LiquidityEvent {
    pub transaction_hash: String,
    pub block_number: u64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub caller: String,
    pub action: LiquidityAction,
    pub lp_address: String,
    /// Underlying raw units moved.
    #[serde(deserialize_with = "deserialize_u256")]
    pub capital_transfered: U256,
    /// LP tokens minted or burned.
    #[serde(deserialize_with = "deserialize_u256")]
    pub tokens_minted: U256,
}

impl LiquidityEvent {
    #[must_use]
    pub fn pool(&self) -> Option<LiquidityPool> {
        liquidity_pool_by_lp_address(&self.lp_address)
    }
}

/// A governance vote.
#[derive(Debug, Clone, Deserialize)]
pub struct VoteEvent {
    pub transaction_hash: String,
    pub block_number: u64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub caller: String,
    pub prop_id: u64,
    /// `1` for yay, `-1` for nay.
    pub opinion: i8,
}

/// Points of one user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserPoints {
    pub address: String,
    pub trading_points: u64,
    pub liquidity_points: u64,
    pub referral_points: u64,
    pub vote_points: u64,
    pub total_points: u64,
    /// Leaderboard rank, 1-based.
    #[serde(default)]
    pub position: Option<u32>,
}

/// Leaderboard, optionally with the requesting user's own entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TopUsers {
    pub top_users: Vec<UserPoints>,
    #[serde(default)]
    pub user: Option<UserPoints>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::pool::PoolId;

    const STATE: &str = r#"{
        "unlocked": "1500000000000000000000",
        "locked": "250000000000000000000",
        "position": "36893488147419103232",
        "balance": "1200000000000000000000",
        "value": "1300000000000000000000",
        "value_week_ago": "1290000000000000000000",
        "underlying_price": "2500",
        "timestamp": 1735686000,
        "block_number": 1000123,
        "apy_all_time": 12.5,
        "apy_week": 8.25,
        "change_all_time": 0.3,
        "change_week": 0.01,
        "date_week_ago": 1735081200,
        "date_genesis": "2023-03-01T00:00:00Z"
    }"#;

    #[test]
    fn state_amounts_are_exact_integers() {
        let state: StateResponse = serde_json::from_str(STATE).unwrap();

        assert_eq!(
            state.unlocked,
            U256::from(1_500_000_000_000_000_000_000u128)
        );
        assert_eq!(state.position, U256::from(2u8) << 64);
        assert_eq!(state.underlying_price, Some(U256::from(2500u32)));
        assert_eq!(state.block_number, 1_000_123);
        assert_eq!(state.timestamp.timestamp(), 1_735_686_000);
    }

    #[test]
    fn state_without_underlying_price() {
        let mut value: serde_json::Value = serde_json::from_str(STATE).unwrap();
        value.as_object_mut().unwrap().remove("underlying_price");
        let state: StateResponse = serde_json::from_value(value).unwrap();
        assert_eq!(state.underlying_price, None);
    }

    #[test]
    fn state_rejects_float_amounts() {
        let bad = STATE.replace(r#""1500000000000000000000""#, "1.5e21");
        assert!(serde_json::from_str::<StateResponse>(&bad).is_err());
    }

    #[test]
    fn trade_event_resolves_pool_and_codes() {
        let json = r#"{
            "transaction_hash": "0xabc",
            "block_number": 900000,
            "timestamp": 1735686000,
            "caller": "0x123",
            "action": "TradeOpen",
            "lp_address": "0x70cad6be2c3fc48c745e4a4b70ef578d9c79b46ffac4cd93ec7b61f951c7c5c",
            "option_side": 1,
            "option_type": 0,
            "maturity": 1760054399,
            "strike_price": "46116860184273879040000",
            "tokens_minted": "1000000000000000000",
            "capital_transfered": "12000000000000000"
        }"#;
        let event: TradeEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.action, TradeAction::TradeOpen);
        assert_eq!(event.side().unwrap(), OptionSide::Short);
        assert_eq!(event.option_type().unwrap(), OptionType::Call);
        assert_eq!(event.pool().map(|p| p.pool_id()), Some(PoolId::EthUsdcCall));
    }

    #[test]
    fn unknown_actions_are_tolerated() {
        let action: LiquidityAction = serde_json::from_str(r#""Migrate""#).unwrap();
        assert_eq!(action, LiquidityAction::Unknown);
    }

    #[test]
    fn pagination() {
        let page: PaginatedResponse<VoteEvent> =
            serde_json::from_str(r#"{"items":[],"page":2,"per_page":50,"total":120}"#).unwrap();
        assert!(page.has_next());

        let last: PaginatedResponse<VoteEvent> =
            serde_json::from_str(r#"{"items":[],"page":3,"per_page":50,"total":120}"#).unwrap();
        assert!(!last.has_next());
    }

    #[test]
    fn leaderboard_without_user() {
        let json = r#"{"top_users":[{"address":"0x1","trading_points":10,"liquidity_points":5,
            "referral_points":0,"vote_points":1,"total_points":16,"position":1}]}"#;
        let top: TopUsers = serde_json::from_str(json).unwrap();

        assert_eq!(top.top_users.len(), 1);
        assert_eq!(top.top_users[0].total_points, 16);
        assert!(top.user.is_none());
    }

    #[test]
    fn live_prices_keep_decimal_precision() {
        let prices: LivePrices =
            serde_json::from_str(r#"{"ETH":"2512.123456789","STRK":0.42}"#).unwrap();
        assert_eq!(prices["ETH"], dec!(2512.123456789));
        assert_eq!(prices["STRK"], dec!(0.42));
    }
}
