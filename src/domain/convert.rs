//! 256-bit integers split into two 128-bit limbs.
//!
//! Cairo `u256` values travel as `(low, high)` felt pairs. These helpers move
//! between that split form, whole [`U256`] integers and [`Decimal256`].

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::decimal::{Decimal256, Rounding};

/// Mask selecting the low 128 bits.
const LOW_MASK: U256 = U256::from_limbs([u64::MAX, u64::MAX, 0, 0]);

/// Unsigned 256-bit integer as `high * 2^128 + low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct U256Limbs {
    /// Lower 128 bits.
    pub low: u128,
    /// Upper 128 bits.
    pub high: u128,
}

impl U256Limbs {
    /// Create a limb pair.
    #[must_use]
    pub const fn new(low: u128, high: u128) -> Self {
        Self { low, high }
    }

    /// Recombine into a single integer.
    #[must_use]
    pub fn to_u256(self) -> U256 {
        (U256::from(self.high) << 128usize) | U256::from(self.low)
    }

    /// Calldata form: `[low, high]` as decimal strings.
    #[must_use]
    pub fn to_calldata(&self) -> [String; 2] {
        [self.low.to_string(), self.high.to_string()]
    }
}

impl From<U256> for U256Limbs {
    fn from(value: U256) -> Self {
        let low = (value & LOW_MASK).to::<u128>();
        let high = (value >> 128usize).to::<u128>();
        Self { low, high }
    }
}

impl From<U256Limbs> for U256 {
    fn from(value: U256Limbs) -> Self {
        value.to_u256()
    }
}

/// Integer part of a decimal, fractional digits dropped.
#[must_use]
pub fn decimal_to_big_int(d: &Decimal256) -> U256 {
    d.to_u256(Rounding::Down)
}

/// Truncate a decimal toward zero and split it into limbs.
#[must_use]
pub fn decimal_to_u256(d: &Decimal256) -> U256Limbs {
    U256Limbs::from(decimal_to_big_int(d))
}

/// Recombine limbs into an exact decimal.
#[must_use]
pub fn u256_to_decimal(value: U256Limbs) -> Decimal256 {
    Decimal256::from_u256(value.to_u256())
}

/// Recombine limbs into an integer.
#[must_use]
pub fn u256_to_big_int(value: U256Limbs) -> U256 {
    value.to_u256()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal256 {
        s.parse().unwrap()
    }

    fn two_pow_128() -> U256 {
        U256::from(1u8) << 128usize
    }

    #[test]
    fn zero() {
        let limbs = decimal_to_u256(&Decimal256::ZERO);
        assert_eq!(limbs, U256Limbs::new(0, 0));
        assert!(u256_to_decimal(limbs).is_zero());
    }

    #[test]
    fn small_number() {
        let limbs = decimal_to_u256(&dec("123456789"));
        assert_eq!(limbs, U256Limbs::new(123_456_789, 0));
        assert_eq!(u256_to_decimal(limbs), dec("123456789"));
    }

    #[test]
    fn large_number_uses_high_limb() {
        let value = two_pow_128() * U256::from(123u8) + U256::from(123_456_789u64);
        let limbs = decimal_to_u256(&Decimal256::from_u256(value));
        assert_eq!(limbs, U256Limbs::new(123_456_789, 123));
        assert_eq!(u256_to_big_int(limbs), value);
    }

    #[test]
    fn very_large_number() {
        let d = dec("100000000000000000000000000000000000000000000000000");
        let limbs = decimal_to_u256(&d);

        // 10^50 mod 2^128 and floor(10^50 / 2^128)
        assert_eq!(limbs.low, 194_599_656_488_044_247_630_319_707_454_198_251_520);
        assert_eq!(limbs.high, 293_873_587_705);
        assert_eq!(u256_to_decimal(limbs), d);
    }

    #[test]
    fn fraction_is_truncated() {
        let limbs = decimal_to_u256(&dec("41.999"));
        assert_eq!(limbs, U256Limbs::new(41, 0));
        assert_eq!(decimal_to_big_int(&dec("0.5")), U256::ZERO);
    }

    #[test]
    fn calldata_is_low_then_high() {
        let limbs = U256Limbs::new(7, 9);
        assert_eq!(limbs.to_calldata(), ["7".to_string(), "9".to_string()]);
    }
}
