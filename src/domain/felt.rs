//! Sequential reader over a flat felt array.
//!
//! Contract return values and the live-options feed are both flat arrays of
//! hex or decimal strings. [`FeltCursor`] consumes them field by field and
//! reports which position failed.

use alloy_primitives::U256;

use super::address::parse_felt;
use super::convert::U256Limbs;
use super::error::DomainError;
use super::fixed::Fixed;

/// Cursor over a felt slice.
#[derive(Debug, Clone)]
pub struct FeltCursor<'a> {
    felts: &'a [String],
    pos: usize,
}

impl<'a> FeltCursor<'a> {
    #[must_use]
    pub const fn new(felts: &'a [String]) -> Self {
        Self { felts, pos: 0 }
    }

    /// Felts not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.felts.len() - self.pos
    }

    /// Next felt as its original string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedData`] when the array is exhausted.
    pub fn next_raw(&mut self) -> Result<&'a str, DomainError> {
        let felt = self
            .felts
            .get(self.pos)
            .ok_or_else(|| DomainError::MalformedData {
                reason: format!("expected a felt at position {}", self.pos),
            })?;
        self.pos += 1;
        Ok(felt.as_str())
    }

    /// Next felt as an integer.
    pub fn next_u256(&mut self) -> Result<U256, DomainError> {
        let pos = self.pos;
        let raw = self.next_raw()?;
        parse_felt(raw).map_err(|_| DomainError::MalformedData {
            reason: format!("felt at position {pos} is not a number: {raw}"),
        })
    }

    /// Next felt narrowed to `u64`.
    pub fn next_u64(&mut self) -> Result<u64, DomainError> {
        let pos = self.pos;
        let value = self.next_u256()?;
        u64::try_from(value).map_err(|_| DomainError::MalformedData {
            reason: format!("felt at position {pos} does not fit in u64"),
        })
    }

    /// Next felt narrowed to `u128`.
    pub fn next_u128(&mut self) -> Result<u128, DomainError> {
        let pos = self.pos;
        let value = self.next_u256()?;
        u128::try_from(value).map_err(|_| DomainError::MalformedData {
            reason: format!("felt at position {pos} does not fit in u128"),
        })
    }

    /// Next felt as a Cairo bool, strictly `0` or `1`.
    pub fn next_bool(&mut self) -> Result<bool, DomainError> {
        let pos = self.pos;
        match self.next_u64()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DomainError::MalformedData {
                reason: format!("felt at position {pos} is not a bool: {other}"),
            }),
        }
    }

    /// Next two felts as `(low, high)`.
    pub fn next_limbs(&mut self) -> Result<U256Limbs, DomainError> {
        let low = self.next_u128()?;
        let high = self.next_u128()?;
        Ok(U256Limbs::new(low, high))
    }

    /// Next two felts as `(mag, sign)`.
    pub fn next_fixed(&mut self) -> Result<Fixed, DomainError> {
        let mag = self.next_u256()?;
        let sign = self.next_bool()?;
        Ok(Fixed::new(mag, sign))
    }

    /// Next felt as a `0x` address string, normalized to lowercase hex.
    pub fn next_address(&mut self) -> Result<String, DomainError> {
        Ok(format!("{:#x}", self.next_u256()?))
    }

    /// Next felt as an array length.
    pub fn next_len(&mut self) -> Result<usize, DomainError> {
        let pos = self.pos;
        let len = self.next_u64()?;
        usize::try_from(len).map_err(|_| DomainError::MalformedData {
            reason: format!("array length at position {pos} is too large"),
        })
    }

    /// Require that every felt was consumed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedData`] when felts are left over.
    pub fn finish(self) -> Result<(), DomainError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(DomainError::MalformedData {
                reason: format!("{n} trailing felts"),
            }),
        }
    }
}
