//! Serde helpers for numeric strings and timestamps.
//!
//! Token amounts arrive as decimal (sometimes hex) strings and must never
//! pass through a float.

use alloy_primitives::U256;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::domain::address::parse_felt;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

impl NumberOrString {
    fn into_u256<E: serde::de::Error>(self) -> Result<U256, E> {
        match self {
            Self::Number(n) => Ok(U256::from(n)),
            Self::String(s) => parse_felt(&s).map_err(E::custom),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SecondsOrText {
    Seconds(i64),
    Text(String),
}

/// Deserialize a `U256` from a decimal string, a `0x` hex string or an
/// unsigned JSON integer.
///
/// # Errors
///
/// Returns an error for negative, fractional or non-numeric input.
pub fn deserialize_u256<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_u256()
}

/// [`deserialize_u256`] for an optional field; `null` maps to `None`.
///
/// # Errors
///
/// Returns an error when a present value is not an unsigned integer.
pub fn deserialize_optional_u256<'de, D>(deserializer: D) -> Result<Option<U256>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(NumberOrString::into_u256)
        .transpose()
}

/// Deserialize a timestamp given as unix seconds or RFC 3339 text.
///
/// # Errors
///
/// Returns an error for out-of-range seconds or unparseable text.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match SecondsOrText::deserialize(deserializer)? {
        SecondsOrText::Seconds(secs) => DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {secs}"))),
        SecondsOrText::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Amount {
        #[serde(deserialize_with = "deserialize_u256")]
        value: U256,
    }

    #[derive(Deserialize)]
    struct Stamp {
        #[serde(deserialize_with = "deserialize_timestamp")]
        at: DateTime<Utc>,
    }

    #[test]
    fn u256_from_large_decimal_string() {
        let parsed: Amount =
            serde_json::from_str(r#"{"value":"340282366920938463463374607431768211456"}"#).unwrap();
        assert_eq!(parsed.value, U256::from(1u8) << 128);
    }

    #[test]
    fn u256_from_hex_and_number() {
        let hex: Amount = serde_json::from_str(r#"{"value":"0xff"}"#).unwrap();
        let num: Amount = serde_json::from_str(r#"{"value":42}"#).unwrap();
        assert_eq!(hex.value, U256::from(255u32));
        assert_eq!(num.value, U256::from(42u32));
    }

    #[test]
    fn u256_rejects_floats_and_negatives() {
        assert!(serde_json::from_str::<Amount>(r#"{"value":"1.5"}"#).is_err());
        assert!(serde_json::from_str::<Amount>(r#"{"value":-1}"#).is_err());
        assert!(serde_json::from_str::<Amount>(r#"{"value":1.5}"#).is_err());
    }

    #[test]
    fn optional_u256_accepts_null_and_missing() {
        #[derive(Deserialize)]
        struct Maybe {
            #[serde(default, deserialize_with = "deserialize_optional_u256")]
            value: Option<U256>,
        }

        let null: Maybe = serde_json::from_str(r#"{"value":null}"#).unwrap();
        let missing: Maybe = serde_json::from_str("{}").unwrap();
        let present: Maybe = serde_json::from_str(r#"{"value":"7"}"#).unwrap();
        assert_eq!(null.value, None);
        assert_eq!(missing.value, None);
        assert_eq!(present.value, Some(U256::from(7u8)));
    }

    #[test]
    fn timestamp_from_seconds_and_text() {
        let secs: Stamp = serde_json::from_str(r#"{"at":1735686000}"#).unwrap();
        let text: Stamp = serde_json::from_str(r#"{"at":"2024-12-31T23:00:00Z"}"#).unwrap();
        assert_eq!(secs.at, text.at);
    }
}
