//! On-chain reads for liquidity pools.

use tracing::{debug, info};

use super::contracts::Contracts;
use crate::domain::option::OptionWithPremia;
use crate::domain::pool::{LiquidityPool, PoolStatus};
use crate::domain::token::WBTC;
use crate::error::Result;

impl LiquidityPool {
    /// Non-expired options of this pool with current premia.
    ///
    /// wBTC pools are listed through the auxiliary contract. A malformed
    /// record fails the whole listing.
    pub async fn fetch_non_expired_options_with_premia(
        &self,
        contracts: &Contracts,
    ) -> Result<Vec<OptionWithPremia>> {
        let options = if self.base() == &WBTC {
            contracts
                .aux()
                .get_all_non_expired_options_with_premia(self.lp_address())
                .await?
        } else {
            contracts
                .amm()
                .get_all_non_expired_options_with_premia(self.lp_address())
                .await?
        };

        info!(pool = %self.pool_id(), count = options.len(), "Fetched non-expired options");
        Ok(options)
    }

    /// Unlocked capital in underlying units.
    pub async fn fetch_unlocked_capital(&self, contracts: &Contracts) -> Result<f64> {
        let raw = contracts.amm().get_unlocked_capital(self.lp_address()).await?;
        Ok(self.underlying().to_human_readable(raw))
    }

    /// Locked capital in underlying units.
    pub async fn fetch_locked_capital(&self, contracts: &Contracts) -> Result<f64> {
        let raw = contracts
            .amm()
            .get_pool_locked_capital(self.lp_address())
            .await?;
        Ok(self.underlying().to_human_readable(raw))
    }

    /// Value of the pool's open positions.
    pub async fn fetch_pool_position(&self, contracts: &Contracts) -> Result<f64> {
        let raw = contracts
            .amm()
            .get_value_of_pool_position(self.lp_address())
            .await?;
        Ok(raw.value())
    }

    /// `unlocked + position`, read concurrently.
    pub async fn fetch_pool_tvl(&self, contracts: &Contracts) -> Result<f64> {
        let (unlocked, position) = tokio::try_join!(
            self.fetch_unlocked_capital(contracts),
            self.fetch_pool_position(contracts),
        )?;
        Ok(unlocked + position)
    }

    /// Unlocked, locked and position read concurrently.
    pub async fn fetch_pool_status(&self, contracts: &Contracts) -> Result<PoolStatus> {
        let (unlocked, locked, position) = tokio::try_join!(
            self.fetch_unlocked_capital(contracts),
            self.fetch_locked_capital(contracts),
            self.fetch_pool_position(contracts),
        )?;

        let status = PoolStatus::new(unlocked, locked, position);
        debug!(
            pool = %self.pool_id(),
            unlocked,
            locked,
            position,
            tvl = status.tvl,
            "Pool status"
        );
        Ok(status)
    }
}
