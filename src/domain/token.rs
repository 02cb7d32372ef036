//! ERC-20 tokens the protocol trades and their unit conversions.
//!
//! - [`Token`] - Immutable descriptor with its `10^decimals` scaling factor
//! - [`RawAmount`] - A raw on-chain amount, whole or split into limbs
//! - [`token_by_address`] / [`token_by_symbol`] - Registry lookups

use alloy_primitives::U256;
use serde::Serialize;

use super::address::addresses_equal;
use super::call::{entrypoint, Call};
use super::constants::{
    AMM_ADDRESS, BTC_ADDRESS, EKUBO_ADDRESS, ETH_ADDRESS, STRK_ADDRESS, USDC_ADDRESS,
};
use super::convert::{decimal_to_big_int, decimal_to_u256, U256Limbs};
use super::decimal::Decimal256;
use super::error::DomainError;

/// Largest decimal count whose factor fits the const constructor.
pub const MAX_DECIMALS: u8 = 38;

const fn pow10_u128(decimals: u8) -> u128 {
    let mut factor = 1u128;
    let mut i = 0;
    while i < decimals {
        factor *= 10;
        i += 1;
    }
    factor
}

/// An ERC-20 token known to the protocol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    address: &'static str,
    name: &'static str,
    symbol: &'static str,
    decimals: u8,
    logo: &'static str,
    #[serde(skip)]
    factor: U256,
}

impl Token {
    /// Create a token descriptor; the scaling factor is computed here.
    ///
    /// # Panics
    ///
    /// Panics when `decimals` exceeds [`MAX_DECIMALS`]. In a `const` or
    /// `static` initializer this is a compile error.
    #[must_use]
    pub const fn new(
        address: &'static str,
        name: &'static str,
        symbol: &'static str,
        decimals: u8,
        logo: &'static str,
    ) -> Self {
        assert!(decimals <= MAX_DECIMALS, "token decimals out of range");
        let factor = pow10_u128(decimals);
        Self {
            address,
            name,
            symbol,
            decimals,
            logo,
            factor: U256::from_limbs([factor as u64, (factor >> 64) as u64, 0, 0]),
        }
    }

    /// Contract address as registered.
    #[must_use]
    pub const fn address(&self) -> &'static str {
        self.address
    }

    /// Human name, e.g. `"ethereum"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Ticker, e.g. `"ETH"`.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Logo image URL.
    #[must_use]
    pub const fn logo(&self) -> &'static str {
        self.logo
    }

    /// `10^decimals`.
    #[must_use]
    pub const fn factor(&self) -> U256 {
        self.factor
    }

    /// Convert a raw amount to human units.
    ///
    /// Limb pairs are recombined into the full integer first; the division
    /// by `10^decimals` is exact and only the final narrowing rounds.
    #[must_use]
    pub fn to_human_readable(&self, raw: impl Into<RawAmount>) -> f64 {
        Decimal256::new(raw.into().to_u256(), u32::from(self.decimals)).to_f64()
    }

    /// Convert a human size to raw units, fraction truncated, as limbs.
    ///
    /// # Errors
    ///
    /// Fails for negative or non-finite sizes and on 256-bit overflow.
    pub fn to_raw(&self, size: f64) -> Result<U256Limbs, DomainError> {
        Ok(decimal_to_u256(&self.scale_up(size)?))
    }

    /// Like [`Token::to_raw`] but as a single integer.
    ///
    /// # Errors
    ///
    /// Fails for negative or non-finite sizes and on 256-bit overflow.
    pub fn to_raw_big_int(&self, size: f64) -> Result<U256, DomainError> {
        Ok(decimal_to_big_int(&self.scale_up(size)?))
    }

    /// Approve the AMM to spend `size` human units of this token.
    ///
    /// # Errors
    ///
    /// Fails when `size` cannot be converted to raw units.
    pub fn approve_call(&self, size: f64) -> Result<Call, DomainError> {
        Ok(self.approve_call_raw(self.to_raw(size)?))
    }

    /// Approve the AMM to spend an already-raw amount.
    #[must_use]
    pub fn approve_call_raw(&self, amount: U256Limbs) -> Call {
        let [low, high] = amount.to_calldata();
        Call::new(
            self.address,
            entrypoint::APPROVE,
            vec![AMM_ADDRESS.to_string(), low, high],
        )
    }

    fn scale_up(&self, size: f64) -> Result<Decimal256, DomainError> {
        Decimal256::from_f64(size)?.checked_mul_u256(self.factor)
    }
}

/// A raw token amount as it comes off the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawAmount {
    /// A whole integer.
    Int(U256),
    /// A Cairo `u256` split into limbs.
    Limbs(U256Limbs),
}

impl RawAmount {
    /// The full integer value.
    #[must_use]
    pub fn to_u256(self) -> U256 {
        match self {
            Self::Int(value) => value,
            Self::Limbs(limbs) => limbs.to_u256(),
        }
    }
}

impl From<U256> for RawAmount {
    fn from(value: U256) -> Self {
        Self::Int(value)
    }
}

impl From<U256Limbs> for RawAmount {
    fn from(value: U256Limbs) -> Self {
        Self::Limbs(value)
    }
}

impl From<u128> for RawAmount {
    fn from(value: u128) -> Self {
        Self::Int(U256::from(value))
    }
}

impl From<u64> for RawAmount {
    fn from(value: u64) -> Self {
        Self::Int(U256::from(value))
    }
}

pub static ETH: Token = Token::new(
    ETH_ADDRESS,
    "ethereum",
    "ETH",
    18,
    "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/assets/0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2/logo.png",
);

pub static USDC: Token = Token::new(
    USDC_ADDRESS,
    "usd-coin",
    "USDC",
    6,
    "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/assets/0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48/logo.png",
);

pub static WBTC: Token = Token::new(
    BTC_ADDRESS,
    "wrapped-bitcoin",
    "wBTC",
    8,
    "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/assets/0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599/logo.png",
);

pub static STRK: Token = Token::new(
    STRK_ADDRESS,
    "starknet",
    "STRK",
    18,
    "https://assets.coingecko.com/coins/images/26433/small/starknet.png",
);

pub static EKUBO: Token = Token::new(
    EKUBO_ADDRESS,
    "ekubo",
    "EKUBO",
    18,
    "https://assets.coingecko.com/coins/images/37715/standard/135474885.png",
);

/// Every registered token.
#[must_use]
pub fn all_tokens() -> [&'static Token; 5] {
    [&ETH, &USDC, &WBTC, &STRK, &EKUBO]
}

/// Find a token by address, ignoring case and zero padding.
#[must_use]
pub fn token_by_address(address: &str) -> Option<&'static Token> {
    all_tokens()
        .into_iter()
        .find(|t| addresses_equal(t.address, address))
}

/// Find a token by exact symbol, e.g. `"wBTC"`.
#[must_use]
pub fn token_by_symbol(symbol: &str) -> Option<&'static Token> {
    all_tokens().into_iter().find(|t| t.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_raw_scales_by_decimals() {
        let raw = ETH.to_raw(12.345).unwrap();
        assert_eq!(raw, U256Limbs::new(12_345_000_000_000_000_000, 0));
        assert_eq!(ETH.to_human_readable(raw), 12.345);
    }

    #[test]
    fn to_raw_truncates_excess_precision() {
        let raw = USDC.to_raw_big_int(1.2345678).unwrap();
        assert_eq!(raw, U256::from(1_234_567u64));
    }

    #[test]
    fn human_readable_from_plain_integers() {
        assert_eq!(USDC.to_human_readable(2_500_000u64), 2.5);
        assert_eq!(WBTC.to_human_readable(U256::from(100_000_000u64)), 1.0);
        assert_eq!(ETH.to_human_readable(U256::ZERO), 0.0);
    }

    #[test]
    fn human_readable_uses_high_limb() {
        // 2^128 wei
        let limbs = U256Limbs::new(0, 1);
        let expected = 340_282_366_920_938_463_463.374_607_431_768_211_456;
        assert_eq!(ETH.to_human_readable(limbs), expected);
    }

    #[test]
    fn negative_size_is_rejected() {
        assert!(matches!(
            ETH.to_raw(-1.0),
            Err(DomainError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn approve_call_targets_token_with_amm_spender() {
        let call = USDC.approve_call(10.5).unwrap();

        assert_eq!(call.contract_address, USDC_ADDRESS);
        assert_eq!(call.entrypoint, "approve");
        assert_eq!(
            call.calldata,
            vec![AMM_ADDRESS.to_string(), "10500000".to_string(), "0".to_string()]
        );
    }

    #[test]
    fn approve_call_raw_passes_limbs_through() {
        let call = ETH.approve_call_raw(U256Limbs::new(5, 7));
        assert_eq!(call.calldata[1], "5");
        assert_eq!(call.calldata[2], "7");
    }

    #[test]
    fn lookup_by_address_ignores_padding_and_case() {
        let padded = "0x0049D36570D4E46F48E99674BD3FCC84644DDD6B96F7C741B1562B82F9E004DC7";
        assert_eq!(token_by_address(padded).map(Token::symbol), Some("ETH"));
        assert!(token_by_address("0x1234").is_none());
    }

    #[test]
    fn lookup_by_symbol_is_exact() {
        assert_eq!(token_by_symbol("wBTC").map(Token::decimals), Some(8));
        assert!(token_by_symbol("WBTC").is_none());
    }

    #[test]
    fn factors_match_decimals() {
        assert_eq!(USDC.factor(), U256::from(1_000_000u64));
        assert_eq!(EKUBO.factor(), U256::from(10u64).pow(U256::from(18u8)));
    }
}
