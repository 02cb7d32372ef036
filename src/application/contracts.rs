//! Typed bindings for the AMM, auxiliary and ERC-20 contracts.
//!
//! Each binding encodes its arguments in ABI order, issues a view call
//! through a [`ContractReader`] and decodes the result felts. The reader is
//! shared, so creating bindings is free.

use std::sync::Arc;

use alloy_primitives::U256;
use tracing::debug;

use crate::domain::call::{entrypoint, Call};
use crate::domain::constants::{AMM_ADDRESS, AUX_ADDRESS};
use crate::domain::convert::U256Limbs;
use crate::domain::error::DomainError;
use crate::domain::felt::FeltCursor;
use crate::domain::fixed::Fixed;
use crate::domain::option::{
    OptionContract, OptionPremia, OptionWithPremia, OPTION_WITH_PREMIA_FELTS,
};
use crate::domain::token::Token;
use crate::error::Result;
use crate::port::ContractReader;

/// Entry point to every contract binding.
#[derive(Clone)]
pub struct Contracts {
    reader: Arc<dyn ContractReader>,
}

impl Contracts {
    #[must_use]
    pub fn new(reader: Arc<dyn ContractReader>) -> Self {
        Self { reader }
    }

    /// The underlying reader.
    #[must_use]
    pub fn reader(&self) -> &Arc<dyn ContractReader> {
        &self.reader
    }

    /// The main AMM.
    #[must_use]
    pub fn amm(&self) -> AmmContract<'_> {
        AmmContract {
            reader: self.reader.as_ref(),
        }
    }

    /// The auxiliary contract.
    #[must_use]
    pub fn aux(&self) -> AuxContract<'_> {
        AuxContract {
            reader: self.reader.as_ref(),
        }
    }

    /// An ERC-20 token contract.
    #[must_use]
    pub fn erc20<'a>(&'a self, token: &'a Token) -> Erc20Contract<'a> {
        Erc20Contract {
            reader: self.reader.as_ref(),
            token,
        }
    }
}

impl std::fmt::Debug for Contracts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contracts")
            .field("reader", &self.reader.name())
            .finish()
    }
}

async fn read(reader: &dyn ContractReader, call: Call) -> Result<Vec<String>> {
    debug!(
        reader = reader.name(),
        contract = %call.contract_address,
        entrypoint = %call.entrypoint,
        args = call.calldata.len(),
        "View call"
    );
    let felts = reader.call(&call).await?;
    debug!(entrypoint = %call.entrypoint, felts = felts.len(), "View call returned");
    Ok(felts)
}

fn decode_limbs(felts: &[String]) -> Result<U256Limbs> {
    let mut cursor = FeltCursor::new(felts);
    let limbs = cursor.next_limbs()?;
    cursor.finish()?;
    Ok(limbs)
}

fn decode_fixed(felts: &[String]) -> Result<Fixed> {
    let mut cursor = FeltCursor::new(felts);
    let fixed = cursor.next_fixed()?;
    cursor.finish()?;
    Ok(fixed)
}

/// Decode a length-prefixed `Array<(Option, Fixed)>`.
fn decode_option_array(felts: &[String]) -> Result<Vec<OptionWithPremia>> {
    let mut cursor = FeltCursor::new(felts);
    let len = cursor.next_len()?;
    if len > cursor.remaining() / OPTION_WITH_PREMIA_FELTS {
        return Err(DomainError::MalformedData {
            reason: format!(
                "array of {len} options does not fit in {} felts",
                cursor.remaining()
            ),
        }
        .into());
    }
    let mut options = Vec::with_capacity(len);
    for _ in 0..len {
        options.push(OptionWithPremia::read_from(&mut cursor)?);
    }
    cursor.finish()?;
    Ok(options)
}

/// Binding for the main AMM.
pub struct AmmContract<'a> {
    reader: &'a dyn ContractReader,
}

impl AmmContract<'_> {
    /// Unlocked capital of a pool in underlying raw units.
    pub async fn get_unlocked_capital(&self, lp_address: &str) -> Result<U256Limbs> {
        let call = Call::new(
            AMM_ADDRESS,
            entrypoint::GET_UNLOCKED_CAPITAL,
            vec![lp_address.to_string()],
        );
        decode_limbs(&read(self.reader, call).await?)
    }

    /// Capital locked in open positions, in underlying raw units.
    pub async fn get_pool_locked_capital(&self, lp_address: &str) -> Result<U256Limbs> {
        let call = Call::new(
            AMM_ADDRESS,
            entrypoint::GET_POOL_LOCKED_CAPITAL,
            vec![lp_address.to_string()],
        );
        decode_limbs(&read(self.reader, call).await?)
    }

    /// Value of the pool's open positions.
    pub async fn get_value_of_pool_position(&self, lp_address: &str) -> Result<Fixed> {
        let call = Call::new(
            AMM_ADDRESS,
            entrypoint::GET_VALUE_OF_POOL_POSITION,
            vec![lp_address.to_string()],
        );
        decode_fixed(&read(self.reader, call).await?)
    }

    /// Premium for trading `size` base raw units of an option.
    pub async fn get_total_premia(
        &self,
        option: &OptionContract,
        size: U256,
        is_closing: bool,
    ) -> Result<OptionPremia> {
        let mut calldata = option.to_calldata();
        calldata.extend(U256Limbs::from(size).to_calldata());
        calldata.push(u8::from(is_closing).to_string());

        let call = Call::new(AMM_ADDRESS, entrypoint::GET_TOTAL_PREMIA, calldata);
        let felts = read(self.reader, call).await?;

        let mut cursor = FeltCursor::new(&felts);
        let premia = OptionPremia::read_from(&mut cursor)?;
        cursor.finish()?;
        Ok(premia)
    }

    /// Every non-expired option of a pool with its premium.
    pub async fn get_all_non_expired_options_with_premia(
        &self,
        lp_address: &str,
    ) -> Result<Vec<OptionWithPremia>> {
        let call = Call::new(
            AMM_ADDRESS,
            entrypoint::GET_ALL_NON_EXPIRED_OPTIONS_WITH_PREMIA,
            vec![lp_address.to_string()],
        );
        decode_option_array(&read(self.reader, call).await?)
    }
}

/// Binding for the auxiliary contract.
///
/// It quotes premia for a smaller reference size, which keeps wBTC premia
/// meaningful.
pub struct AuxContract<'a> {
    reader: &'a dyn ContractReader,
}

impl AuxContract<'_> {
    /// Every non-expired option of a pool with its premium.
    pub async fn get_all_non_expired_options_with_premia(
        &self,
        lp_address: &str,
    ) -> Result<Vec<OptionWithPremia>> {
        let call = Call::new(
            AUX_ADDRESS,
            entrypoint::GET_ALL_NON_EXPIRED_OPTIONS_WITH_PREMIA,
            vec![lp_address.to_string()],
        );
        decode_option_array(&read(self.reader, call).await?)
    }
}

/// Binding for an ERC-20 token.
pub struct Erc20Contract<'a> {
    reader: &'a dyn ContractReader,
    token: &'a Token,
}

impl Erc20Contract<'_> {
    /// Raw balance of `owner`.
    pub async fn balance_of(&self, owner: &str) -> Result<U256Limbs> {
        let call = Call::new(
            self.token.address(),
            entrypoint::BALANCE_OF,
            vec![owner.to_string()],
        );
        decode_limbs(&read(self.reader, call).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::error::Error;

    fn felts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn option_array_reads_length_prefix() {
        let data = felts(&[
            "0x1",
            "0x1",
            "0x68ba27ff",
            "0x9c40000000000000000",
            "0x0",
            "0x53c91253bc9682c04929ca02ed00b3e423f6710d2ee7e0d5ebb06f3ecf368a8",
            "0x49d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7",
            "0x1",
            "0x743f969b548ac182",
            "0x0",
        ]);
        let options = decode_option_array(&data).unwrap();

        assert_eq!(options.len(), 1);
        assert!(options[0].option().is_short());
        assert!(options[0].option().is_put());
    }

    #[test]
    fn option_array_rejects_short_payload() {
        let data = felts(&["0x2", "0x0"]);
        assert!(matches!(
            decode_option_array(&data),
            Err(Error::Domain(DomainError::MalformedData { .. }))
        ));
    }

    #[test]
    fn option_array_rejects_oversized_length() {
        let data = felts(&["0xffffffffffffffff", "0x0"]);
        assert!(matches!(
            decode_option_array(&data),
            Err(Error::Domain(DomainError::MalformedData { .. }))
        ));
    }

    #[test]
    fn empty_option_array() {
        assert!(decode_option_array(&felts(&["0x0"])).unwrap().is_empty());
    }

    #[test]
    fn limbs_require_exactly_two_felts() {
        assert_eq!(
            decode_limbs(&felts(&["0x10", "0x0"])).unwrap(),
            U256Limbs::new(16, 0)
        );
        assert!(decode_limbs(&felts(&["0x10"])).is_err());
        assert!(decode_limbs(&felts(&["0x10", "0x0", "0x0"])).is_err());
    }
}
