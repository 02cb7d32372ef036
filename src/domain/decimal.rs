//! Exact non-negative decimals backed by a 256-bit mantissa.
//!
//! Every unit conversion in the crate goes through [`Decimal256`]: human
//! sizes are parsed from their shortest round-trip representation, scaled by
//! an integer factor (10^decimals or 2^64) with pure integer math, and only
//! then rounded to an integer or narrowed to `f64`. Nothing is divided in
//! floating point before scaling.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;

use super::error::DomainError;

/// Largest `d` for which 10^d fits in 256 bits.
const MAX_POW10: u32 = 77;

/// Rounding applied when an exact decimal is cast to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Drop the fractional part.
    Down,
    /// Round to nearest, ties away from zero.
    HalfAwayFromZero,
}

/// Non-negative decimal equal to `mantissa / 10^scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal256 {
    mantissa: U256,
    scale: u32,
}

/// Compute 10^d as U256, or `None` when it does not fit.
pub(crate) fn pow10(d: u32) -> Option<U256> {
    if d > MAX_POW10 {
        return None;
    }
    let ten = U256::from(10u8);
    let mut p = U256::from(1u8);
    for _ in 0..d {
        p = p.checked_mul(ten)?;
    }
    Some(p)
}

impl Decimal256 {
    /// Zero.
    pub const ZERO: Self = Self {
        mantissa: U256::ZERO,
        scale: 0,
    };

    /// Create a decimal from a raw mantissa and base-10 scale.
    #[must_use]
    pub const fn new(mantissa: U256, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    /// Create an integral decimal.
    #[must_use]
    pub const fn from_u256(value: U256) -> Self {
        Self::new(value, 0)
    }

    /// Parse a float through its shortest round-trip decimal form.
    ///
    /// `12.345` becomes exactly `12345 / 10^3`, not the binary approximation
    /// the float stores.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidNumber`] for NaN or infinities,
    /// [`DomainError::NegativeAmount`] for values below zero, and
    /// [`DomainError::Overflow`] when the digits do not fit in 256 bits.
    pub fn from_f64(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidNumber {
                input: value.to_string(),
            });
        }
        if value < 0.0 {
            return Err(DomainError::NegativeAmount { value });
        }
        // f64 Display never uses exponent notation and is shortest round-trip
        value.abs().to_string().parse()
    }

    /// The integer mantissa.
    #[must_use]
    pub const fn mantissa(&self) -> U256 {
        self.mantissa
    }

    /// Number of base-10 fractional digits.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Whether the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Multiply by an integer factor.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] when the product does not fit in
    /// 256 bits.
    pub fn checked_mul_u256(&self, factor: U256) -> Result<Self, DomainError> {
        let mantissa = self
            .mantissa
            .checked_mul(factor)
            .ok_or_else(|| DomainError::Overflow {
                context: format!("{self} * {factor}"),
            })?;
        Ok(Self::new(mantissa, self.scale))
    }

    /// Exact product of two decimals.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] when the mantissa product does not
    /// fit in 256 bits.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, DomainError> {
        let overflow = || DomainError::Overflow {
            context: format!("{self} * {other}"),
        };
        let mantissa = self.mantissa.checked_mul(other.mantissa).ok_or_else(overflow)?;
        let scale = self.scale.checked_add(other.scale).ok_or_else(overflow)?;
        Ok(Self::new(mantissa, scale))
    }

    /// Cast to an integer with the given rounding.
    #[must_use]
    pub fn to_u256(&self, rounding: Rounding) -> U256 {
        let Some(divisor) = pow10(self.scale) else {
            // mantissa < 2^256 < 10^78 / 2, so the value is below one half
            return U256::ZERO;
        };
        let quotient = self.mantissa / divisor;
        let remainder = self.mantissa % divisor;

        match rounding {
            Rounding::Down => quotient,
            Rounding::HalfAwayFromZero => {
                if !remainder.is_zero() && remainder >= divisor - remainder {
                    quotient + U256::from(1u8)
                } else {
                    quotient
                }
            }
        }
    }

    /// The integer part, fractional digits dropped.
    #[must_use]
    pub fn trunc(&self) -> Self {
        Self::from_u256(self.to_u256(Rounding::Down))
    }

    /// Narrow to the nearest `f64`.
    ///
    /// The conversion is correctly rounded: the exact mantissa and exponent
    /// are handed to the float parser in one piece.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        format!("{}e-{}", self.mantissa, self.scale)
            .parse()
            .unwrap_or(f64::INFINITY)
    }
}

impl From<U256> for Decimal256 {
    fn from(value: U256) -> Self {
        Self::from_u256(value)
    }
}

impl FromStr for Decimal256 {
    type Err = DomainError;

    /// Parse a plain decimal string such as `"12.345"` or `"1000"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidNumber {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let (int_part, frac_part) = match trimmed.split_once('.') {
            Some((i, f)) => (i, f),
            None => (trimmed, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let frac_part = frac_part.trim_end_matches('0');
        let digits = format!("{int_part}{frac_part}");
        let digits = digits.trim_start_matches('0');
        let mantissa = if digits.is_empty() {
            U256::ZERO
        } else {
            U256::from_str_radix(digits, 10).map_err(|_| DomainError::Overflow {
                context: s.to_string(),
            })?
        };
        let scale = u32::try_from(frac_part.len()).map_err(|_| invalid())?;

        Ok(Self::new(mantissa, scale))
    }
}

impl fmt::Display for Decimal256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{digits}");
        }
        if digits.len() <= scale {
            let zeros = "0".repeat(scale - digits.len());
            return write!(f, "0.{zeros}{digits}");
        }
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        write!(f, "{int_part}.{frac_part}")
    }
}
