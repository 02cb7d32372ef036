//! Premium quotes for options.
//!
//! A failed quote is reported as `None` rather than an error so callers can
//! tell "no quote" apart from bad input.

use tracing::warn;

use super::contracts::Contracts;
use crate::domain::option::{OptionContract, OptionPremia};
use crate::error::Result;

impl OptionContract {
    /// Raw premia for `size` base units, with and without fees.
    ///
    /// # Errors
    ///
    /// Only an invalid `size` is an error; a failed contract read yields
    /// `Ok(None)`.
    pub async fn get_premia_raw(
        &self,
        contracts: &Contracts,
        size: f64,
        is_closing: bool,
    ) -> Result<Option<OptionPremia>> {
        let raw_size = self.base().to_raw_big_int(size)?;

        match contracts
            .amm()
            .get_total_premia(self, raw_size, is_closing)
            .await
        {
            Ok(premia) => Ok(Some(premia)),
            Err(error) => {
                warn!(
                    option = %self.option_id(),
                    size,
                    is_closing,
                    error = %error,
                    "Premia quote failed"
                );
                Ok(None)
            }
        }
    }

    /// Premium including fees.
    pub async fn get_premia(
        &self,
        contracts: &Contracts,
        size: f64,
        is_closing: bool,
    ) -> Result<Option<f64>> {
        let premia = self.get_premia_raw(contracts, size, is_closing).await?;
        Ok(premia.map(|p| p.with_fees.value()))
    }

    /// Premium excluding fees.
    pub async fn get_premia_without_fees(
        &self,
        contracts: &Contracts,
        size: f64,
        is_closing: bool,
    ) -> Result<Option<f64>> {
        let premia = self.get_premia_raw(contracts, size, is_closing).await?;
        Ok(premia.map(|p| p.without_fees.value()))
    }
}
