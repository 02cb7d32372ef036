//! Domain validation errors for the numeric layer and protocol entities.
//!
//! Lookups that may legitimately miss (token by symbol, pool by address)
//! return [`Option`]. The variants here cover constructors and conversions
//! whose inputs violate an invariant.
//!
//! # Examples
//!
//! ```
//! use carmine::domain::error::DomainError;
//! use carmine::domain::pool::{LiquidityPool, OptionType};
//! use carmine::domain::constants::USDC_ADDRESS;
//!
//! // USDC/USDC is not a pool the protocol deploys
//! let result = LiquidityPool::new(USDC_ADDRESS, USDC_ADDRESS, OptionType::Call);
//!
//! assert!(matches!(result, Err(DomainError::UnsupportedPool { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// No registered token has this address.
    #[error("unknown token address: {address}")]
    UnknownToken {
        /// The address that failed to resolve.
        address: String,
    },

    /// The base/quote/type combination has no deployed liquidity pool.
    #[error("unsupported pool: {pool_id}")]
    UnsupportedPool {
        /// The derived pool identifier.
        pool_id: String,
    },

    /// Slippage tolerance must lie in `[0, 0.6]`.
    #[error("slippage out of bounds: {slippage} (allowed 0 to 0.6)")]
    SlippageOutOfBounds {
        /// The rejected slippage fraction.
        slippage: f64,
    },

    /// Token amounts are unsigned; a negative value cannot be encoded.
    #[error("amount must not be negative, got {value}")]
    NegativeAmount {
        /// The rejected value.
        value: f64,
    },

    /// The input is NaN, infinite, or not a decimal number.
    #[error("invalid number: {input}")]
    InvalidNumber {
        /// Textual form of the rejected input.
        input: String,
    },

    /// The value does not fit in 256 bits.
    #[error("value overflows 256 bits: {context}")]
    Overflow {
        /// What was being computed.
        context: String,
    },

    /// The string is not a hex or decimal field element.
    #[error("invalid address or felt: {input}")]
    InvalidFelt {
        /// The rejected input.
        input: String,
    },

    /// Option side wire value other than 0 or 1.
    #[error("invalid option side: {value}")]
    InvalidOptionSide {
        /// The rejected wire value.
        value: String,
    },

    /// Option type wire value other than 0 or 1.
    #[error("invalid option type: {value}")]
    InvalidOptionType {
        /// The rejected wire value.
        value: String,
    },

    /// A felt array could not be decoded into the expected structure.
    #[error("malformed contract data: {reason}")]
    MalformedData {
        /// Description of what went wrong.
        reason: String,
    },
}
