//! Starknet address and felt helpers.
//!
//! Addresses arrive with mixed case and arbitrary zero padding. Comparisons
//! go through the parsed integer so `0x049d…` and `0x49d…` are equal.

use alloy_primitives::U256;

use super::error::DomainError;

/// Normalize an address for use as a query parameter or map key.
///
/// Lowercases, strips the `0x` prefix and leading zeros, keeps a single `0`
/// for the zero address, then re-adds `0x`.
#[must_use]
pub fn sanitize_address(address: &str) -> String {
    let lower = address.trim().to_lowercase();
    let without_prefix = lower.strip_prefix("0x").unwrap_or(&lower);
    let stripped = without_prefix.trim_start_matches('0');
    let normalized = if stripped.is_empty() { "0" } else { stripped };

    format!("0x{normalized}")
}

/// Parse a felt given as `0x`-prefixed hex or plain decimal.
///
/// # Errors
///
/// Returns [`DomainError::InvalidFelt`] when the string is neither.
pub fn parse_felt(value: &str) -> Result<U256, DomainError> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some("") => Ok(U256::ZERO),
        Some(hex) => U256::from_str_radix(hex, 16),
        None => U256::from_str_radix(trimmed, 10),
    };

    parsed.map_err(|_| DomainError::InvalidFelt {
        input: value.to_string(),
    })
}

/// Render a felt as lowercase `0x` hex without padding.
#[must_use]
pub fn felt_to_hex(value: U256) -> String {
    format!("{value:#x}")
}

/// Compare two addresses by numeric value.
///
/// Unparseable input never matches.
#[must_use]
pub fn addresses_equal(a: &str, b: &str) -> bool {
    match (parse_felt(a), parse_felt(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
