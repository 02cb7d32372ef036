//! Signed 64.64 fixed-point values as the AMM encodes them.
//!
//! The contract stores a magnitude scaled by 2^64 and a separate sign flag;
//! there is no two's complement.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::decimal::{Decimal256, Rounding};
use super::error::DomainError;

/// 2^64, the fixed-point scale.
pub const MATH_64_BASE: U256 = U256::from_limbs([0, 1, 0, 0]);

/// 2^-64; multiplying by a power of two is exact in binary floating point.
const INV_MATH_64_BASE: f64 = 1.0 / 18_446_744_073_709_551_616.0;

/// Signed fixed-point number: `(sign ? -1 : 1) * mag / 2^64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixed {
    /// Magnitude scaled by 2^64.
    pub mag: U256,
    /// `true` when the value is negative.
    pub sign: bool,
}

impl Fixed {
    /// Create a fixed-point value from its wire components.
    #[must_use]
    pub const fn new(mag: U256, sign: bool) -> Self {
        Self { mag, sign }
    }

    /// Encode a float; see [`f64_to_fixed`].
    ///
    /// # Errors
    ///
    /// Returns an error for NaN, infinities, or magnitudes beyond 256 bits.
    pub fn from_f64(value: f64) -> Result<Self, DomainError> {
        f64_to_fixed(value)
    }

    /// The value as a float; see [`fixed_to_f64`].
    #[must_use]
    pub fn value(&self) -> f64 {
        fixed_to_f64(self)
    }

    /// Calldata form: `[mag, "1" | "0"]`.
    #[must_use]
    pub fn to_calldata(&self) -> [String; 2] {
        [
            self.mag.to_string(),
            if self.sign { "1" } else { "0" }.to_string(),
        ]
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Convert a fixed-point value to the nearest `f64`.
///
/// The magnitude is narrowed once (correctly rounded) and then scaled by
/// 2^-64, which introduces no further rounding, so the result equals the
/// exact quotient rounded to `f64`.
#[must_use]
pub fn fixed_to_f64(n: &Fixed) -> f64 {
    let mag: f64 = n.mag.to_string().parse().unwrap_or(f64::INFINITY);
    let val = mag * INV_MATH_64_BASE;
    if n.sign {
        -val
    } else {
        val
    }
}

/// Encode a float as fixed point.
///
/// `sign = value < 0` and `mag = round(|value| * 2^64)`, rounding half away
/// from zero on the exact decimal form of `value`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidNumber`] for NaN or infinities and
/// [`DomainError::Overflow`] when the magnitude exceeds 256 bits.
pub fn f64_to_fixed(value: f64) -> Result<Fixed, DomainError> {
    let sign = value < 0.0;
    let mag = Decimal256::from_f64(value.abs())?
        .checked_mul_u256(MATH_64_BASE)?
        .to_u256(Rounding::HalfAwayFromZero);

    Ok(Fixed { mag, sign })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mag(s: &str) -> U256 {
        U256::from_str_radix(s, 10).unwrap()
    }

    #[test]
    fn math_64_base_is_two_pow_64() {
        assert_eq!(MATH_64_BASE, U256::from(1u8) << 64usize);
    }

    #[test]
    fn converts_positive_fixed() {
        let f = Fixed::new(mag("44272185776902923878400"), false);
        assert_eq!(fixed_to_f64(&f), 2400.0);
    }

    #[test]
    fn converts_negative_fixed() {
        let f = Fixed::new(mag("44272185776902923878400"), true);
        assert_eq!(fixed_to_f64(&f), -2400.0);
    }

    #[test]
    fn one_and_minus_three() {
        assert_eq!(Fixed::new(MATH_64_BASE, false).value(), 1.0);
        assert_eq!(
            Fixed::new(MATH_64_BASE * U256::from(3u8), true).value(),
            -3.0
        );
    }

    #[test]
    fn encodes_with_decimal_rounding() {
        // 0.0123 * 2^64 = 226894952106627484.8768
        let f = f64_to_fixed(0.0123).unwrap();
        assert_eq!(f.mag, mag("226894952106627485"));
        assert!(!f.sign);
    }

    #[test]
    fn encodes_negative_values_with_sign_flag() {
        let f = f64_to_fixed(-4900.0).unwrap();
        assert_eq!(f.mag, mag("90389045961176802918400"));
        assert!(f.sign);
    }

    #[test]
    fn negative_zero_is_positive() {
        let f = f64_to_fixed(-0.0).unwrap();
        assert_eq!(f.mag, U256::ZERO);
        assert!(!f.sign);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(f64_to_fixed(f64::NAN).is_err());
        assert!(f64_to_fixed(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn calldata_form() {
        let f = Fixed::new(U256::from(5u8), true);
        assert_eq!(f.to_calldata(), ["5".to_string(), "1".to_string()]);
    }
}
