//! Protocol domain model and the numeric conversions it rests on.
//!
//! Nothing in here performs I/O. Network reads live in
//! [`crate::application`] and go through the [`crate::port`] traits.

pub mod address;
pub mod call;
pub mod constants;
pub mod convert;
pub mod decimal;
pub mod error;
pub mod felt;
pub mod fixed;
pub mod option;
pub mod pool;
pub mod token;

// Numeric layer
pub use convert::{decimal_to_big_int, decimal_to_u256, u256_to_big_int, u256_to_decimal, U256Limbs};
pub use decimal::{Decimal256, Rounding};
pub use fixed::{f64_to_fixed, fixed_to_f64, Fixed, MATH_64_BASE};

// Entities
pub use call::Call;
pub use option::{
    decode_options_with_premia, OptionContract, OptionDescriptor, OptionPremia, OptionSide,
    OptionWithPremia,
};
pub use pool::{
    all_liquidity_pools, all_token_pairs, liquidity_pool_by_address,
    liquidity_pool_by_lp_address, liquidity_pool_by_symbol, LiquidityPool, OptionType, PoolId,
    PoolStatus, TokenPair, UserPoolInfo,
};
pub use token::{all_tokens, token_by_address, token_by_symbol, RawAmount, Token};

// Helpers
pub use address::sanitize_address;
pub use error::DomainError;
