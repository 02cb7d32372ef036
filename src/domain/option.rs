//! Options on a liquidity pool and the trade calldata built from them.
//!
//! - [`OptionSide`] - Long or short, with its wire code
//! - [`OptionDescriptor`] - The option struct as the AMM encodes it
//! - [`OptionContract`] - A resolved option; builds approvals and trades
//! - [`OptionWithPremia`] - An option paired with a quoted premium
//! - [`OptionPremia`] - Premium quote with and without fees

use std::fmt;

use serde::Serialize;

use super::call::{entrypoint, Call};
use super::constants::{AMM_ADDRESS, DEFAULT_TRADE_DEADLINE_SECS, MAX_SLIPPAGE};
use super::convert::U256Limbs;
use super::decimal::Decimal256;
use super::error::DomainError;
use super::felt::FeltCursor;
use super::fixed::{f64_to_fixed, Fixed};
use super::pool::{LiquidityPool, OptionType, PoolId};
use super::token::Token;

/// Felts per option-with-premia record: seven for the option, two for the
/// premium.
pub const OPTION_WITH_PREMIA_FELTS: usize = 9;

/// Position side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionSide {
    Long,
    Short,
}

impl OptionSide {
    /// Wire code: long = 0, short = 1.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Long => 0,
            Self::Short => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }
}

impl TryFrom<u64> for OptionSide {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Long),
            1 => Ok(Self::Short),
            other => Err(DomainError::InvalidOptionSide {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "Long"),
            Self::Short => write!(f, "Short"),
        }
    }
}

/// The option struct exactly as it travels on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub side: OptionSide,
    pub option_type: OptionType,
    /// Expiry as a unix timestamp in seconds.
    pub maturity: u64,
    pub strike: Fixed,
    pub base_address: String,
    pub quote_address: String,
}

impl OptionDescriptor {
    /// Read the seven-felt option struct: side, maturity, strike mag,
    /// strike sign, quote, base, type.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedData`] when a field is missing or not
    /// numeric and the side/type errors for codes other than 0 or 1.
    pub fn read_from(cursor: &mut FeltCursor<'_>) -> Result<Self, DomainError> {
        let side = OptionSide::try_from(cursor.next_u64()?)?;
        let maturity = cursor.next_u64()?;
        let strike = cursor.next_fixed()?;
        let quote_address = cursor.next_address()?;
        let base_address = cursor.next_address()?;
        let option_type = OptionType::try_from(cursor.next_u64()?)?;

        Ok(Self {
            side,
            option_type,
            maturity,
            strike,
            base_address,
            quote_address,
        })
    }
}

/// A resolved option on a deployed pool.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionContract {
    pool: LiquidityPool,
    side: OptionSide,
    maturity: u64,
    strike_raw: Fixed,
    strike: f64,
}

impl OptionContract {
    /// Resolve the pool named by the descriptor.
    ///
    /// # Errors
    ///
    /// Fails when the token addresses or their combination are unknown.
    pub fn new(descriptor: &OptionDescriptor) -> Result<Self, DomainError> {
        let pool = LiquidityPool::new(
            &descriptor.base_address,
            &descriptor.quote_address,
            descriptor.option_type,
        )?;
        Ok(Self::on_pool(
            pool,
            descriptor.side,
            descriptor.maturity,
            descriptor.strike,
        ))
    }

    /// Build an option on an already resolved pool.
    #[must_use]
    pub fn on_pool(pool: LiquidityPool, side: OptionSide, maturity: u64, strike: Fixed) -> Self {
        Self {
            pool,
            side,
            maturity,
            strike_raw: strike,
            strike: strike.value(),
        }
    }

    #[must_use]
    pub const fn pool(&self) -> &LiquidityPool {
        &self.pool
    }

    #[must_use]
    pub const fn side(&self) -> OptionSide {
        self.side
    }

    #[must_use]
    pub const fn maturity(&self) -> u64 {
        self.maturity
    }

    /// Strike as stored on chain.
    #[must_use]
    pub const fn strike_raw(&self) -> Fixed {
        self.strike_raw
    }

    /// Strike in quote units.
    #[must_use]
    pub const fn strike(&self) -> f64 {
        self.strike
    }

    #[must_use]
    pub const fn option_type(&self) -> OptionType {
        self.pool.option_type()
    }

    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool.pool_id()
    }

    #[must_use]
    pub fn base(&self) -> &'static Token {
        self.pool.base()
    }

    #[must_use]
    pub fn quote(&self) -> &'static Token {
        self.pool.quote()
    }

    #[must_use]
    pub fn underlying(&self) -> &'static Token {
        self.pool.underlying()
    }

    #[must_use]
    pub const fn is_long(&self) -> bool {
        matches!(self.side, OptionSide::Long)
    }

    #[must_use]
    pub const fn is_short(&self) -> bool {
        matches!(self.side, OptionSide::Short)
    }

    #[must_use]
    pub const fn is_call(&self) -> bool {
        self.pool.is_call()
    }

    #[must_use]
    pub const fn is_put(&self) -> bool {
        self.pool.is_put()
    }

    /// Stable identifier: `{pool_id}-{side}-{maturity}-{strike}`.
    #[must_use]
    pub fn option_id(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.pool_id(),
            self.side.as_str(),
            self.maturity,
            self.strike
        )
    }

    /// Descriptor for this option with registry addresses.
    #[must_use]
    pub fn descriptor(&self) -> OptionDescriptor {
        OptionDescriptor {
            side: self.side,
            option_type: self.option_type(),
            maturity: self.maturity,
            strike: self.strike_raw,
            base_address: self.base().address().to_string(),
            quote_address: self.quote().address().to_string(),
        }
    }

    /// The option struct as calldata: side, maturity, strike mag, strike
    /// sign, quote, base, type.
    #[must_use]
    pub fn to_calldata(&self) -> Vec<String> {
        let [mag, sign] = self.strike_raw.to_calldata();
        vec![
            self.side.as_u8().to_string(),
            self.maturity.to_string(),
            mag,
            sign,
            self.quote().address().to_string(),
            self.base().address().to_string(),
            self.option_type().as_u8().to_string(),
        ]
    }

    /// Size in base token raw units; option sizes are always denominated
    /// in the base token.
    fn raw_size(&self, size: f64) -> Result<alloy_primitives::U256, DomainError> {
        self.base().to_raw_big_int(size)
    }

    /// Bound the premium by a slippage tolerance.
    ///
    /// Opening a long or closing a short pays premium, so the bound is
    /// raised by `1 + slippage`. Opening a short or closing a long receives
    /// premium, so it is lowered by `1 - slippage`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::SlippageOutOfBounds`] unless
    /// `0 <= slippage <= 0.6`, [`DomainError::NegativeAmount`] for a negative
    /// premium and [`DomainError::InvalidNumber`] for a non-finite one.
    pub fn add_slippage_to_premia(
        &self,
        premia: f64,
        slippage: f64,
        is_closing: bool,
    ) -> Result<f64, DomainError> {
        if !(0.0..=MAX_SLIPPAGE).contains(&slippage) {
            return Err(DomainError::SlippageOutOfBounds { slippage });
        }

        let multiplier = if self.is_long() != is_closing {
            1.0 + slippage
        } else {
            1.0 - slippage
        };
        let premia = Decimal256::from_f64(premia)?;
        let multiplier = Decimal256::from_f64(multiplier)?;
        Ok(premia.checked_mul(&multiplier)?.to_f64())
    }

    /// Raw amount of the underlying to approve before trading.
    ///
    /// Longs approve the premium with slippage. A short call locks `size`
    /// and receives the premium. A short put locks `size * strike` and
    /// receives the premium.
    ///
    /// # Errors
    ///
    /// Fails on out-of-bounds slippage or when the amount is negative.
    pub fn to_approve(
        &self,
        size: f64,
        premia: f64,
        slippage: f64,
        is_closing: bool,
    ) -> Result<U256Limbs, DomainError> {
        let premia_with_slippage = self.add_slippage_to_premia(premia, slippage, is_closing)?;

        let amount = if self.is_long() {
            premia_with_slippage
        } else if self.is_call() {
            size - premia_with_slippage
        } else {
            size * self.strike - premia_with_slippage
        };

        self.underlying().to_raw(amount)
    }

    /// Approval call for [`OptionContract::to_approve`].
    ///
    /// # Errors
    ///
    /// Same as [`OptionContract::to_approve`].
    pub fn approve_call(
        &self,
        size: f64,
        premia: f64,
        slippage: f64,
        is_closing: bool,
    ) -> Result<Call, DomainError> {
        let amount = self.to_approve(size, premia, slippage, is_closing)?;
        Ok(self.underlying().approve_call_raw(amount))
    }

    /// Arguments for `trade_settle`: type, strike mag, `"0"`, maturity,
    /// side, raw size, quote, base.
    ///
    /// # Errors
    ///
    /// Fails for negative or non-finite sizes.
    pub fn trade_settle_calldata(&self, size: f64) -> Result<Vec<String>, DomainError> {
        Ok(vec![
            self.option_type().as_u8().to_string(),
            self.strike_raw.mag.to_string(),
            // strike sign, strikes are never negative
            "0".to_string(),
            self.maturity.to_string(),
            self.side.as_u8().to_string(),
            self.raw_size(size)?.to_string(),
            self.quote().address().to_string(),
            self.base().address().to_string(),
        ])
    }

    /// Arguments for `trade_open`/`trade_close` with the deadline measured
    /// from the current time.
    ///
    /// # Errors
    ///
    /// Fails for invalid sizes or premium limits.
    pub fn trade_calldata(
        &self,
        size: f64,
        premia_limit: f64,
        deadline_secs: u64,
    ) -> Result<Vec<String>, DomainError> {
        self.trade_calldata_at(size, premia_limit, deadline_secs, unix_now())
    }

    /// Settle arguments followed by the premium limit mag, `"0"` and the
    /// absolute deadline `now + deadline_secs`.
    ///
    /// # Errors
    ///
    /// Fails for invalid sizes or premium limits, and with
    /// [`DomainError::Overflow`] when the deadline does not fit in a `u64`.
    pub fn trade_calldata_at(
        &self,
        size: f64,
        premia_limit: f64,
        deadline_secs: u64,
        now: u64,
    ) -> Result<Vec<String>, DomainError> {
        let deadline = now
            .checked_add(deadline_secs)
            .ok_or_else(|| DomainError::Overflow {
                context: format!("deadline {now} + {deadline_secs}"),
            })?;
        let premia_fixed = f64_to_fixed(premia_limit)?;
        let mut calldata = self.trade_settle_calldata(size)?;
        calldata.push(premia_fixed.mag.to_string());
        calldata.push("0".to_string());
        calldata.push(deadline.to_string());
        Ok(calldata)
    }

    /// Approval and `trade_open` with the default 300 second deadline.
    ///
    /// # Errors
    ///
    /// Fails on out-of-bounds slippage or invalid amounts.
    pub fn trade_open(
        &self,
        size: f64,
        premia: f64,
        slippage: f64,
    ) -> Result<[Call; 2], DomainError> {
        self.trade_open_with_deadline(size, premia, slippage, DEFAULT_TRADE_DEADLINE_SECS)
    }

    /// Approval and `trade_open` with an explicit deadline.
    ///
    /// # Errors
    ///
    /// Fails on out-of-bounds slippage or invalid amounts.
    pub fn trade_open_with_deadline(
        &self,
        size: f64,
        premia: f64,
        slippage: f64,
        deadline_secs: u64,
    ) -> Result<[Call; 2], DomainError> {
        self.trade_bundle(
            entrypoint::TRADE_OPEN,
            false,
            size,
            premia,
            slippage,
            deadline_secs,
            unix_now(),
        )
    }

    /// Approval and `trade_close` with the default 300 second deadline.
    ///
    /// # Errors
    ///
    /// Fails on out-of-bounds slippage or invalid amounts.
    pub fn trade_close(
        &self,
        size: f64,
        premia: f64,
        slippage: f64,
    ) -> Result<[Call; 2], DomainError> {
        self.trade_close_with_deadline(size, premia, slippage, DEFAULT_TRADE_DEADLINE_SECS)
    }

    /// Approval and `trade_close` with an explicit deadline.
    ///
    /// # Errors
    ///
    /// Fails on out-of-bounds slippage or invalid amounts.
    pub fn trade_close_with_deadline(
        &self,
        size: f64,
        premia: f64,
        slippage: f64,
        deadline_secs: u64,
    ) -> Result<[Call; 2], DomainError> {
        self.trade_bundle(
            entrypoint::TRADE_CLOSE,
            true,
            size,
            premia,
            slippage,
            deadline_secs,
            unix_now(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn trade_bundle(
        &self,
        entrypoint: &str,
        is_closing: bool,
        size: f64,
        premia: f64,
        slippage: f64,
        deadline_secs: u64,
        now: u64,
    ) -> Result<[Call; 2], DomainError> {
        let premia_limit = self.add_slippage_to_premia(premia, slippage, is_closing)?;
        let approve = self.approve_call(size, premia, slippage, is_closing)?;
        let trade = Call::new(
            AMM_ADDRESS,
            entrypoint,
            self.trade_calldata_at(size, premia_limit, deadline_secs, now)?,
        );
        Ok([approve, trade])
    }

    /// `trade_settle` call for an expired option.
    ///
    /// # Errors
    ///
    /// Fails for negative or non-finite sizes.
    pub fn trade_settle(&self, size: f64) -> Result<Call, DomainError> {
        Ok(Call::new(
            AMM_ADDRESS,
            entrypoint::TRADE_SETTLE,
            self.trade_settle_calldata(size)?,
        ))
    }
}

impl fmt::Display for OptionContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} strike {} maturity {}",
            self.side,
            self.pool.pair().pair_id(),
            self.option_type(),
            self.strike,
            self.maturity
        )
    }
}

fn unix_now() -> u64 {
    // round to the nearest second
    let millis = chrono::Utc::now().timestamp_millis();
    u64::try_from((millis + 500) / 1000).unwrap_or_default()
}

/// An option with a quoted premium attached.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionWithPremia {
    option: OptionContract,
    premia_raw: Fixed,
    premia: f64,
}

impl OptionWithPremia {
    /// Resolve the descriptor and attach the premium.
    ///
    /// # Errors
    ///
    /// Fails when the descriptor names an unknown pool.
    pub fn new(descriptor: &OptionDescriptor, premia: Fixed) -> Result<Self, DomainError> {
        Ok(Self::from_option(OptionContract::new(descriptor)?, premia))
    }

    #[must_use]
    pub fn from_option(option: OptionContract, premia: Fixed) -> Self {
        Self {
            option,
            premia_raw: premia,
            premia: premia.value(),
        }
    }

    /// Read a nine-felt record: the option struct then premium mag and sign.
    ///
    /// # Errors
    ///
    /// Fails on malformed felts or an unknown pool.
    pub fn read_from(cursor: &mut FeltCursor<'_>) -> Result<Self, DomainError> {
        let descriptor = OptionDescriptor::read_from(cursor)?;
        let premia = cursor.next_fixed()?;
        Self::new(&descriptor, premia)
    }

    #[must_use]
    pub const fn option(&self) -> &OptionContract {
        &self.option
    }

    #[must_use]
    pub const fn premia_raw(&self) -> Fixed {
        self.premia_raw
    }

    /// Premium in underlying units.
    #[must_use]
    pub const fn premia(&self) -> f64 {
        self.premia
    }
}

/// Decode a flat array of nine-felt option-with-premia records.
///
/// Any malformed record fails the whole batch.
///
/// # Errors
///
/// Returns [`DomainError::MalformedData`] when the length is not a multiple
/// of nine or a record does not decode.
pub fn decode_options_with_premia(felts: &[String]) -> Result<Vec<OptionWithPremia>, DomainError> {
    if felts.len() % OPTION_WITH_PREMIA_FELTS != 0 {
        return Err(DomainError::MalformedData {
            reason: format!(
                "{} felts is not a whole number of {OPTION_WITH_PREMIA_FELTS}-felt records",
                felts.len()
            ),
        });
    }

    let mut cursor = FeltCursor::new(felts);
    let mut options = Vec::with_capacity(felts.len() / OPTION_WITH_PREMIA_FELTS);
    while cursor.remaining() > 0 {
        options.push(OptionWithPremia::read_from(&mut cursor)?);
    }
    Ok(options)
}

/// Premium quote for a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionPremia {
    pub with_fees: Fixed,
    pub without_fees: Fixed,
}

impl OptionPremia {
    /// Read the `(without_fees, with_fees)` tuple the AMM returns.
    ///
    /// # Errors
    ///
    /// Fails on malformed felts.
    pub fn read_from(cursor: &mut FeltCursor<'_>) -> Result<Self, DomainError> {
        let without_fees = cursor.next_fixed()?;
        let with_fees = cursor.next_fixed()?;
        Ok(Self {
            with_fees,
            without_fees,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;

    use super::*;
    use crate::domain::constants::{ETH_ADDRESS, USDC_ADDRESS};

    const MATURITY: u64 = 1_760_054_399;
    const NOW: u64 = 1_735_686_000;

    fn strike_4900() -> Fixed {
        Fixed::new(
            U256::from_str_radix("90389045961176802918400", 10).unwrap(),
            false,
        )
    }

    fn descriptor(side: OptionSide, option_type: OptionType) -> OptionDescriptor {
        OptionDescriptor {
            side,
            option_type,
            maturity: MATURITY,
            strike: strike_4900(),
            base_address: ETH_ADDRESS.to_string(),
            quote_address: USDC_ADDRESS.to_string(),
        }
    }

    fn option(side: OptionSide, option_type: OptionType) -> OptionContract {
        OptionContract::new(&descriptor(side, option_type)).unwrap()
    }

    #[test]
    fn builds_from_descriptor() {
        let o = option(OptionSide::Short, OptionType::Call);

        assert_eq!(o.strike(), 4900.0);
        assert_eq!(o.maturity(), MATURITY);
        assert_eq!(o.base().symbol(), "ETH");
        assert_eq!(o.quote().symbol(), "USDC");
        assert_eq!(o.strike_raw(), strike_4900());
        assert!(o.is_call() && !o.is_put());
        assert!(o.is_short() && !o.is_long());
    }

    #[test]
    fn side_and_type_flags() {
        let long_put = option(OptionSide::Long, OptionType::Put);
        assert!(long_put.is_long() && long_put.is_put());

        let short_put = option(OptionSide::Short, OptionType::Put);
        assert!(short_put.is_short() && short_put.is_put());
        assert_eq!(short_put.underlying().symbol(), "USDC");
    }

    #[test]
    fn option_id_combines_pool_side_maturity_strike() {
        let o = option(OptionSide::Long, OptionType::Put);
        assert_eq!(o.option_id(), "eth-usdc-put-long-1760054399-4900");
    }

    #[test]
    fn trade_settle_calldata_layout() {
        let o = option(OptionSide::Short, OptionType::Call);
        let calldata = o.trade_settle_calldata(1.0).unwrap();

        assert_eq!(
            calldata,
            vec![
                "0".to_string(),
                "90389045961176802918400".to_string(),
                "0".to_string(),
                MATURITY.to_string(),
                "1".to_string(),
                "1000000000000000000".to_string(),
                USDC_ADDRESS.to_string(),
                ETH_ADDRESS.to_string(),
            ]
        );
    }

    #[test]
    fn trade_calldata_appends_limit_and_deadline() {
        let o = option(OptionSide::Short, OptionType::Call);
        let calldata = o.trade_calldata_at(1.54321, 0.0123, 300, NOW).unwrap();

        assert_eq!(calldata.len(), 11);
        assert_eq!(calldata[5], "1543210000000000000");
        assert_eq!(calldata[8], "226894952106627485");
        assert_eq!(calldata[9], "0");
        assert_eq!(calldata[10], (NOW + 300).to_string());
    }

    #[test]
    fn deadline_overflow_is_an_error() {
        let o = option(OptionSide::Long, OptionType::Call);

        assert!(matches!(
            o.trade_calldata_at(1.0, 0.1, u64::MAX, NOW),
            Err(DomainError::Overflow { .. })
        ));
        assert!(matches!(
            o.trade_calldata(1.0, 0.1, u64::MAX),
            Err(DomainError::Overflow { .. })
        ));
    }

    #[test]
    fn option_struct_calldata_order() {
        let o = option(OptionSide::Long, OptionType::Put);
        assert_eq!(
            o.to_calldata(),
            vec![
                "0".to_string(),
                MATURITY.to_string(),
                "90389045961176802918400".to_string(),
                "0".to_string(),
                USDC_ADDRESS.to_string(),
                ETH_ADDRESS.to_string(),
                "1".to_string(),
            ]
        );
    }

    #[test]
    fn slippage_bounds() {
        let o = option(OptionSide::Long, OptionType::Call);

        assert!(matches!(
            o.add_slippage_to_premia(1.0, 0.9, false),
            Err(DomainError::SlippageOutOfBounds { .. })
        ));
        assert!(matches!(
            o.add_slippage_to_premia(1.0, -0.001, false),
            Err(DomainError::SlippageOutOfBounds { .. })
        ));
        assert!(o.add_slippage_to_premia(1.0, 0.6, false).is_ok());
        assert!(o.add_slippage_to_premia(1.0, f64::NAN, false).is_err());
    }

    #[test]
    fn slippage_keeps_extreme_premia() {
        let long = option(OptionSide::Long, OptionType::Call);

        let tiny = long.add_slippage_to_premia(1e-30, 0.1, false).unwrap();
        assert!((tiny - 1.1e-30).abs() < 1e-44);

        let huge = long.add_slippage_to_premia(1e30, 0.1, false).unwrap();
        assert!((huge - 1.1e30).abs() < 1e16);

        assert!(matches!(
            long.add_slippage_to_premia(-1.0, 0.1, false),
            Err(DomainError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn slippage_direction() {
        let long = option(OptionSide::Long, OptionType::Call);
        let short = option(OptionSide::Short, OptionType::Call);

        assert_eq!(long.add_slippage_to_premia(0.5, 0.02, false).unwrap(), 0.51);
        assert_eq!(long.add_slippage_to_premia(0.5, 0.02, true).unwrap(), 0.49);
        assert_eq!(short.add_slippage_to_premia(0.5, 0.02, false).unwrap(), 0.49);
        assert_eq!(short.add_slippage_to_premia(0.5, 0.02, true).unwrap(), 0.51);
    }

    #[test]
    fn to_approve_per_position_kind() {
        // 0.5 * 1.1
        let long_call = option(OptionSide::Long, OptionType::Call);
        assert_eq!(
            long_call.to_approve(1.0, 0.5, 0.1, false).unwrap(),
            U256Limbs::new(550_000_000_000_000_000, 0)
        );

        // 1 - 0.5 * 0.5
        let short_call = option(OptionSide::Short, OptionType::Call);
        assert_eq!(
            short_call.to_approve(1.0, 0.5, 0.5, false).unwrap(),
            U256Limbs::new(750_000_000_000_000_000, 0)
        );

        // 1 * 4900 - 100 * 0.9 in USDC units
        let short_put = option(OptionSide::Short, OptionType::Put);
        assert_eq!(
            short_put.to_approve(1.0, 100.0, 0.1, false).unwrap(),
            U256Limbs::new(4_810_000_000, 0)
        );
    }

    #[test]
    fn to_approve_rejects_negative_collateral() {
        let short_call = option(OptionSide::Short, OptionType::Call);
        assert!(matches!(
            short_call.to_approve(1.0, 2.0, 0.0, false),
            Err(DomainError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn trade_open_bundles_approve_then_trade() {
        let o = option(OptionSide::Long, OptionType::Put);
        let [approve, trade] = o
            .trade_bundle(entrypoint::TRADE_OPEN, false, 2.0, 10.0, 0.05, 300, NOW)
            .unwrap();

        assert_eq!(approve.contract_address, USDC_ADDRESS);
        assert_eq!(approve.calldata[1], "10500000");
        assert_eq!(trade.contract_address, AMM_ADDRESS);
        assert_eq!(trade.entrypoint, "trade_open");
        assert_eq!(trade.calldata[5], "2000000000000000000");
        assert_eq!(trade.calldata[8], f64_to_fixed(10.5).unwrap().mag.to_string());
        assert_eq!(trade.calldata[10], (NOW + 300).to_string());
    }

    #[test]
    fn trade_close_lowers_long_premia_limit() {
        let o = option(OptionSide::Long, OptionType::Put);
        let [_, trade] = o.trade_close(2.0, 10.0, 0.05).unwrap();

        assert_eq!(trade.entrypoint, "trade_close");
        assert_eq!(trade.calldata[8], f64_to_fixed(9.5).unwrap().mag.to_string());
    }

    #[test]
    fn trade_settle_call() {
        let o = option(OptionSide::Long, OptionType::Call);
        let call = o.trade_settle(0.5).unwrap();

        assert_eq!(call.entrypoint, "trade_settle");
        assert_eq!(call.contract_address, AMM_ADDRESS);
        assert_eq!(call.calldata[5], "500000000000000000");
    }

    fn live_felts() -> Vec<String> {
        [
            "0x0",
            "0x68ba27ff",
            "0x9c40000000000000000",
            "0x0",
            "0x53c91253bc9682c04929ca02ed00b3e423f6710d2ee7e0d5ebb06f3ecf368a8",
            "0x49d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7",
            "0x0",
            "0x743f969b548ac182",
            "0x0",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
    }

    #[test]
    fn decodes_option_with_premia_record() {
        let options = decode_options_with_premia(&live_felts()).unwrap();
        assert_eq!(options.len(), 1);

        let o = &options[0];
        assert_eq!(o.option().pool_id(), PoolId::EthUsdcCall);
        assert_eq!(o.option().side(), OptionSide::Long);
        assert_eq!(o.option().maturity(), 0x68ba_27ff);
        assert_eq!(o.option().strike(), 2500.0);
        assert!(o.premia() > 0.45 && o.premia() < 0.46);
    }

    #[test]
    fn partial_record_fails_batch() {
        let mut felts = live_felts();
        felts.pop();
        assert!(decode_options_with_premia(&felts).is_err());
    }

    #[test]
    fn unknown_side_fails_batch() {
        let mut felts = live_felts();
        felts[0] = "0x5".to_string();
        assert!(matches!(
            decode_options_with_premia(&felts),
            Err(DomainError::InvalidOptionSide { .. })
        ));
    }

    #[test]
    fn premia_tuple_is_without_fees_first() {
        let felts: Vec<String> = ["0x10000000000000000", "0x0", "0x20000000000000000", "0x0"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        let premia = OptionPremia::read_from(&mut FeltCursor::new(&felts)).unwrap();

        assert_eq!(premia.without_fees.value(), 1.0);
        assert_eq!(premia.with_fees.value(), 2.0);
    }
}
