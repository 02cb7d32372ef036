//! Liquidity pools, their identifiers and the static pool registry.
//!
//! - [`OptionType`] - Call or put, with its wire code
//! - [`PoolId`] - The ten pools deployed on mainnet
//! - [`TokenPair`] - Base and quote token
//! - [`LiquidityPool`] - A pair plus option type, resolved to its LP token
//! - [`PoolStatus`], [`UserPoolInfo`] - Read-side views

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::address::addresses_equal;
use super::call::{entrypoint, Call};
use super::constants::{
    AMM_ADDRESS, BTC_USDC_CALL_ADDRESS, BTC_USDC_PUT_ADDRESS, EKUBO_USDC_CALL_ADDRESS,
    EKUBO_USDC_PUT_ADDRESS, ETH_STRK_CALL_ADDRESS, ETH_STRK_PUT_ADDRESS, ETH_USDC_CALL_ADDRESS,
    ETH_USDC_PUT_ADDRESS, LP_TOKEN_DECIMALS, STRK_USDC_CALL_ADDRESS, STRK_USDC_PUT_ADDRESS,
};
use super::convert::U256Limbs;
use super::decimal::Decimal256;
use super::error::DomainError;
use super::token::{token_by_address, Token, EKUBO, ETH, STRK, USDC, WBTC};

/// Option type. The wire code doubles as the pool discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Wire code: call = 0, put = 1.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Call => 0,
            Self::Put => 1,
        }
    }

    /// Lowercase name used in pool ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }
}

impl TryFrom<u64> for OptionType {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Call),
            1 => Ok(Self::Put),
            other => Err(DomainError::InvalidOptionType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "Call"),
            Self::Put => write!(f, "Put"),
        }
    }
}

/// Identifier of a deployed liquidity pool, `{base}-{quote}-{type}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoolId {
    EthUsdcCall,
    EthUsdcPut,
    BtcUsdcCall,
    BtcUsdcPut,
    StrkUsdcCall,
    StrkUsdcPut,
    EkuboUsdcCall,
    EkuboUsdcPut,
    EthStrkCall,
    EthStrkPut,
}

impl PoolId {
    /// All pools in registry order.
    pub const ALL: [Self; 10] = [
        Self::EthUsdcCall,
        Self::EthUsdcPut,
        Self::BtcUsdcCall,
        Self::BtcUsdcPut,
        Self::StrkUsdcCall,
        Self::StrkUsdcPut,
        Self::EkuboUsdcCall,
        Self::EkuboUsdcPut,
        Self::EthStrkCall,
        Self::EthStrkPut,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EthUsdcCall => "eth-usdc-call",
            Self::EthUsdcPut => "eth-usdc-put",
            Self::BtcUsdcCall => "btc-usdc-call",
            Self::BtcUsdcPut => "btc-usdc-put",
            Self::StrkUsdcCall => "strk-usdc-call",
            Self::StrkUsdcPut => "strk-usdc-put",
            Self::EkuboUsdcCall => "ekubo-usdc-call",
            Self::EkuboUsdcPut => "ekubo-usdc-put",
            Self::EthStrkCall => "eth-strk-call",
            Self::EthStrkPut => "eth-strk-put",
        }
    }

    /// Address of the pool's LP token, which also identifies the pool on
    /// the AMM.
    #[must_use]
    pub const fn lp_address(self) -> &'static str {
        match self {
            Self::EthUsdcCall => ETH_USDC_CALL_ADDRESS,
            Self::EthUsdcPut => ETH_USDC_PUT_ADDRESS,
            Self::BtcUsdcCall => BTC_USDC_CALL_ADDRESS,
            Self::BtcUsdcPut => BTC_USDC_PUT_ADDRESS,
            Self::StrkUsdcCall => STRK_USDC_CALL_ADDRESS,
            Self::StrkUsdcPut => STRK_USDC_PUT_ADDRESS,
            Self::EkuboUsdcCall => EKUBO_USDC_CALL_ADDRESS,
            Self::EkuboUsdcPut => EKUBO_USDC_PUT_ADDRESS,
            Self::EthStrkCall => ETH_STRK_CALL_ADDRESS,
            Self::EthStrkPut => ETH_STRK_PUT_ADDRESS,
        }
    }

    #[must_use]
    pub fn base(self) -> &'static Token {
        match self {
            Self::EthUsdcCall | Self::EthUsdcPut | Self::EthStrkCall | Self::EthStrkPut => &ETH,
            Self::BtcUsdcCall | Self::BtcUsdcPut => &WBTC,
            Self::StrkUsdcCall | Self::StrkUsdcPut => &STRK,
            Self::EkuboUsdcCall | Self::EkuboUsdcPut => &EKUBO,
        }
    }

    #[must_use]
    pub fn quote(self) -> &'static Token {
        match self {
            Self::EthStrkCall | Self::EthStrkPut => &STRK,
            _ => &USDC,
        }
    }

    #[must_use]
    pub const fn option_type(self) -> OptionType {
        match self {
            Self::EthUsdcCall
            | Self::BtcUsdcCall
            | Self::StrkUsdcCall
            | Self::EkuboUsdcCall
            | Self::EthStrkCall => OptionType::Call,
            _ => OptionType::Put,
        }
    }

    /// Derive the pool id string for a base/quote/type combination.
    ///
    /// Symbols are lowercased and wBTC is spelled `btc`. The result need not
    /// name a deployed pool.
    #[must_use]
    pub fn derive_id(base: &Token, quote: &Token, option_type: OptionType) -> String {
        format!(
            "{}-{}-{}",
            id_symbol(base),
            id_symbol(quote),
            option_type.as_str()
        )
    }
}

fn id_symbol(token: &Token) -> String {
    if token.symbol() == "wBTC" {
        "btc".to_string()
    } else {
        token.symbol().to_lowercase()
    }
}

impl FromStr for PoolId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DomainError::UnsupportedPool {
                pool_id: s.to_string(),
            })
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A base/quote token pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPair {
    base: &'static Token,
    quote: &'static Token,
}

impl TokenPair {
    /// Resolve both tokens by address.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownToken`] when either address is not
    /// registered.
    pub fn new(base_address: &str, quote_address: &str) -> Result<Self, DomainError> {
        Ok(Self {
            base: resolve_token(base_address)?,
            quote: resolve_token(quote_address)?,
        })
    }

    #[must_use]
    pub const fn base(&self) -> &'static Token {
        self.base
    }

    #[must_use]
    pub const fn quote(&self) -> &'static Token {
        self.quote
    }

    /// `"{BASE}-{QUOTE}"` using token symbols, e.g. `"ETH-USDC"`.
    #[must_use]
    pub fn pair_id(&self) -> String {
        format!("{}-{}", self.base.symbol(), self.quote.symbol())
    }

    /// The pool of the given type for this pair.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnsupportedPool`] when no such pool exists.
    pub fn with_type(&self, option_type: OptionType) -> Result<LiquidityPool, DomainError> {
        LiquidityPool::from_tokens(self.base, self.quote, option_type)
    }
}

fn resolve_token(address: &str) -> Result<&'static Token, DomainError> {
    token_by_address(address).ok_or_else(|| DomainError::UnknownToken {
        address: address.to_string(),
    })
}

/// A deployed liquidity pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityPool {
    pool_id: PoolId,
}

impl LiquidityPool {
    /// Resolve a pool from token addresses and type.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownToken`] for an unregistered address and
    /// [`DomainError::UnsupportedPool`] when the combination has no pool.
    pub fn new(
        base_address: &str,
        quote_address: &str,
        option_type: OptionType,
    ) -> Result<Self, DomainError> {
        TokenPair::new(base_address, quote_address)?.with_type(option_type)
    }

    /// Resolve a pool from token descriptors and type.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnsupportedPool`] when the combination has no
    /// pool.
    pub fn from_tokens(
        base: &Token,
        quote: &Token,
        option_type: OptionType,
    ) -> Result<Self, DomainError> {
        let id = PoolId::derive_id(base, quote, option_type);
        Ok(Self::from_pool_id(id.parse()?))
    }

    #[must_use]
    pub const fn from_pool_id(pool_id: PoolId) -> Self {
        Self { pool_id }
    }

    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool_id
    }

    #[must_use]
    pub const fn lp_address(&self) -> &'static str {
        self.pool_id.lp_address()
    }

    #[must_use]
    pub fn base(&self) -> &'static Token {
        self.pool_id.base()
    }

    #[must_use]
    pub fn quote(&self) -> &'static Token {
        self.pool_id.quote()
    }

    #[must_use]
    pub const fn option_type(&self) -> OptionType {
        self.pool_id.option_type()
    }

    #[must_use]
    pub fn pair(&self) -> TokenPair {
        TokenPair {
            base: self.base(),
            quote: self.quote(),
        }
    }

    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self.option_type(), OptionType::Call)
    }

    #[must_use]
    pub const fn is_put(&self) -> bool {
        matches!(self.option_type(), OptionType::Put)
    }

    /// The token locked and settled: base for calls, quote for puts.
    #[must_use]
    pub fn underlying(&self) -> &'static Token {
        if self.is_call() {
            self.base()
        } else {
            self.quote()
        }
    }

    /// `"Call"` or `"Put"`.
    #[must_use]
    pub fn type_as_text(&self) -> String {
        self.option_type().to_string()
    }

    /// Arguments for `deposit_liquidity` and `withdraw_liquidity`.
    ///
    /// Layout: underlying, quote, base, type, raw size, `"0"`. The size is
    /// floored to underlying raw units and its high limb is always `"0"`,
    /// so sizes of 2^128 raw units or more do not encode.
    ///
    /// # Errors
    ///
    /// Fails for negative or non-finite sizes.
    pub fn lp_calldata(&self, size: f64) -> Result<Vec<String>, DomainError> {
        let raw = self.underlying().to_raw_big_int(size)?;
        Ok(vec![
            self.underlying().address().to_string(),
            self.quote().address().to_string(),
            self.base().address().to_string(),
            self.option_type().as_u8().to_string(),
            raw.to_string(),
            "0".to_string(),
        ])
    }

    fn lp_call(&self, size: f64, entrypoint: &str) -> Result<Call, DomainError> {
        Ok(Call::new(AMM_ADDRESS, entrypoint, self.lp_calldata(size)?))
    }

    /// `deposit_liquidity` without the preceding approval.
    ///
    /// # Errors
    ///
    /// Fails for negative or non-finite sizes.
    pub fn deposit_call(&self, size: f64) -> Result<Call, DomainError> {
        self.lp_call(size, entrypoint::DEPOSIT_LIQUIDITY)
    }

    /// Approval of the underlying followed by `deposit_liquidity`.
    ///
    /// # Errors
    ///
    /// Fails for negative or non-finite sizes.
    pub fn deposit(&self, size: f64) -> Result<[Call; 2], DomainError> {
        let approve = self.underlying().approve_call(size)?;
        Ok([approve, self.deposit_call(size)?])
    }

    /// `withdraw_liquidity` for `size` underlying units.
    ///
    /// # Errors
    ///
    /// Fails for negative or non-finite sizes.
    pub fn withdraw_call(&self, size: f64) -> Result<Call, DomainError> {
        self.lp_call(size, entrypoint::WITHDRAW_LIQUIDITY)
    }
}

impl fmt::Display for LiquidityPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pair().pair_id(), self.option_type())
    }
}

/// Capital snapshot of a pool, in underlying units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PoolStatus {
    pub unlocked: f64,
    pub locked: f64,
    pub position: f64,
    /// `unlocked + position`; locked capital is not added.
    pub tvl: f64,
}

impl PoolStatus {
    #[must_use]
    pub fn new(unlocked: f64, locked: f64, position: f64) -> Self {
        Self {
            unlocked,
            locked,
            position,
            tvl: unlocked + position,
        }
    }
}

/// A user's stake in a pool.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPoolInfo {
    pub pool: LiquidityPool,
    /// LP tokens held.
    pub size_raw: U256Limbs,
    pub size: f64,
    /// Value of the stake in underlying units.
    pub value_raw: U256Limbs,
    pub value: f64,
    /// Portion of the value that is currently withdrawable.
    pub unlocked_raw: U256Limbs,
    pub unlocked: f64,
}

impl UserPoolInfo {
    #[must_use]
    pub fn new(
        pool: LiquidityPool,
        size: U256Limbs,
        value: U256Limbs,
        unlocked: U256Limbs,
    ) -> Self {
        let underlying = pool.underlying();
        Self {
            pool,
            size_raw: size,
            size: lp_tokens_to_human_readable(size),
            value_raw: value,
            value: underlying.to_human_readable(value),
            unlocked_raw: unlocked,
            unlocked: underlying.to_human_readable(unlocked),
        }
    }
}

/// LP token amounts use 18 decimals for every pool.
#[must_use]
pub fn lp_tokens_to_human_readable(amount: U256Limbs) -> f64 {
    Decimal256::new(amount.to_u256(), LP_TOKEN_DECIMALS).to_f64()
}

/// Every deployed pool, in registry order.
pub fn all_liquidity_pools() -> impl Iterator<Item = LiquidityPool> {
    PoolId::ALL.into_iter().map(LiquidityPool::from_pool_id)
}

/// Every distinct token pair with at least one pool.
#[must_use]
pub fn all_token_pairs() -> Vec<TokenPair> {
    let mut pairs: Vec<TokenPair> = Vec::new();
    for pool in all_liquidity_pools() {
        let pair = pool.pair();
        if !pairs.contains(&pair) {
            pairs.push(pair);
        }
    }
    pairs
}

/// Find a pool by token addresses, compared numerically.
#[must_use]
pub fn liquidity_pool_by_address(
    base_address: &str,
    quote_address: &str,
    option_type: OptionType,
) -> Option<LiquidityPool> {
    all_liquidity_pools().find(|lp| {
        addresses_equal(lp.base().address(), base_address)
            && addresses_equal(lp.quote().address(), quote_address)
            && lp.option_type() == option_type
    })
}

/// Find a pool by exact token symbols.
#[must_use]
pub fn liquidity_pool_by_symbol(
    base_symbol: &str,
    quote_symbol: &str,
    option_type: OptionType,
) -> Option<LiquidityPool> {
    all_liquidity_pools().find(|lp| {
        lp.base().symbol() == base_symbol
            && lp.quote().symbol() == quote_symbol
            && lp.option_type() == option_type
    })
}

/// Find a pool by its LP token address, compared numerically.
#[must_use]
pub fn liquidity_pool_by_lp_address(lp_address: &str) -> Option<LiquidityPool> {
    all_liquidity_pools().find(|lp| addresses_equal(lp.lp_address(), lp_address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::{BTC_ADDRESS, ETH_ADDRESS, STRK_ADDRESS, USDC_ADDRESS};

    #[test]
    fn eth_usdc_call_resolves_to_registered_lp() {
        let pool = LiquidityPool::new(ETH_ADDRESS, USDC_ADDRESS, OptionType::Call).unwrap();

        assert_eq!(pool.pool_id().as_str(), "eth-usdc-call");
        assert_eq!(pool.lp_address(), ETH_USDC_CALL_ADDRESS);
        assert_eq!(pool.base().symbol(), "ETH");
        assert_eq!(pool.quote().symbol(), "USDC");
    }

    #[test]
    fn wbtc_is_spelled_btc_in_pool_ids() {
        let pool = LiquidityPool::new(BTC_ADDRESS, USDC_ADDRESS, OptionType::Put).unwrap();
        assert_eq!(pool.pool_id(), PoolId::BtcUsdcPut);
        assert_eq!(pool.to_string(), "wBTC-USDC Put");
    }

    #[test]
    fn unsupported_combination_fails() {
        let result = LiquidityPool::new(USDC_ADDRESS, ETH_ADDRESS, OptionType::Call);
        assert_eq!(
            result,
            Err(DomainError::UnsupportedPool {
                pool_id: "usdc-eth-call".to_string()
            })
        );
    }

    #[test]
    fn unknown_token_fails() {
        let result = LiquidityPool::new("0x123", USDC_ADDRESS, OptionType::Call);
        assert!(matches!(result, Err(DomainError::UnknownToken { .. })));
    }

    #[test]
    fn underlying_follows_option_type() {
        let call = LiquidityPool::from_pool_id(PoolId::EthUsdcCall);
        let put = LiquidityPool::from_pool_id(PoolId::EthUsdcPut);

        assert_eq!(call.underlying().symbol(), "ETH");
        assert_eq!(put.underlying().symbol(), "USDC");
        assert_eq!(call.type_as_text(), "Call");
        assert_eq!(put.type_as_text(), "Put");
    }

    #[test]
    fn every_pool_id_round_trips_through_its_tokens() {
        for id in PoolId::ALL {
            let pool = LiquidityPool::from_tokens(id.base(), id.quote(), id.option_type()).unwrap();
            assert_eq!(pool.pool_id(), id);
            assert_eq!(id.as_str().parse::<PoolId>().unwrap(), id);
        }
    }

    #[test]
    fn lp_calldata_layout() {
        let pool = LiquidityPool::from_pool_id(PoolId::EthUsdcPut);
        let calldata = pool.lp_calldata(1.5).unwrap();

        assert_eq!(
            calldata,
            vec![
                USDC_ADDRESS.to_string(),
                USDC_ADDRESS.to_string(),
                ETH_ADDRESS.to_string(),
                "1".to_string(),
                "1500000".to_string(),
                "0".to_string(),
            ]
        );
    }

    #[test]
    fn lp_calldata_floors_size() {
        let pool = LiquidityPool::from_pool_id(PoolId::EthUsdcPut);
        let calldata = pool.lp_calldata(0.0000019).unwrap();
        assert_eq!(calldata[4], "1");
    }

    #[test]
    fn deposit_is_approve_then_deposit() {
        let pool = LiquidityPool::from_pool_id(PoolId::StrkUsdcCall);
        let [approve, deposit] = pool.deposit(2.0).unwrap();

        assert_eq!(approve.contract_address, STRK_ADDRESS);
        assert_eq!(approve.entrypoint, "approve");
        assert_eq!(approve.calldata[1], "2000000000000000000");
        assert_eq!(deposit.contract_address, AMM_ADDRESS);
        assert_eq!(deposit.entrypoint, "deposit_liquidity");
    }

    #[test]
    fn withdraw_targets_amm() {
        let pool = LiquidityPool::from_pool_id(PoolId::EthStrkCall);
        let call = pool.withdraw_call(1.0).unwrap();

        assert_eq!(call.contract_address, AMM_ADDRESS);
        assert_eq!(call.entrypoint, "withdraw_liquidity");
        assert_eq!(call.calldata[0], ETH_ADDRESS);
        assert_eq!(call.calldata[1], STRK_ADDRESS);
    }

    #[test]
    fn registry_lookups() {
        assert_eq!(all_liquidity_pools().count(), 10);
        assert_eq!(all_token_pairs().len(), 5);

        let by_symbol = liquidity_pool_by_symbol("wBTC", "USDC", OptionType::Call).unwrap();
        assert_eq!(by_symbol.pool_id(), PoolId::BtcUsdcCall);

        let padded = "0x0049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7";
        let by_address = liquidity_pool_by_address(padded, USDC_ADDRESS, OptionType::Put).unwrap();
        assert_eq!(by_address.pool_id(), PoolId::EthUsdcPut);

        let by_lp = liquidity_pool_by_lp_address(EKUBO_USDC_PUT_ADDRESS).unwrap();
        assert_eq!(by_lp.pool_id(), PoolId::EkuboUsdcPut);

        assert!(liquidity_pool_by_symbol("ETH", "ETH", OptionType::Call).is_none());
    }

    #[test]
    fn token_pair_id_uses_symbols() {
        let pair = TokenPair::new(ETH_ADDRESS, STRK_ADDRESS).unwrap();
        assert_eq!(pair.pair_id(), "ETH-STRK");
        assert_eq!(pair.with_type(OptionType::Put).unwrap().pool_id(), PoolId::EthStrkPut);
    }

    #[test]
    fn pool_status_tvl_excludes_locked() {
        let status = PoolStatus::new(10.0, 4.0, 2.5);
        assert_eq!(status.tvl, 12.5);
    }

    #[test]
    fn user_pool_info_converts_units() {
        let pool = LiquidityPool::from_pool_id(PoolId::EthUsdcPut);
        let info = UserPoolInfo::new(
            pool,
            U256Limbs::new(1_500_000_000_000_000_000, 0),
            U256Limbs::new(2_000_000, 0),
            U256Limbs::new(500_000, 0),
        );

        assert_eq!(info.size, 1.5);
        assert_eq!(info.value, 2.0);
        assert_eq!(info.unlocked, 0.5);
    }

    #[test]
    fn option_type_wire_codes() {
        assert_eq!(OptionType::try_from(0).unwrap(), OptionType::Call);
        assert_eq!(OptionType::try_from(1).unwrap(), OptionType::Put);
        assert!(OptionType::try_from(2).is_err());
        assert_eq!(OptionType::Put.as_u8(), 1);
    }
}
