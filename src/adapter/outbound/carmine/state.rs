//! Typed pool state from the backend.

use alloy_primitives::U256;
use chrono::{DateTime, Utc};

use super::dto::StateResponse;
use crate::domain::convert::U256Limbs;
use crate::domain::fixed::Fixed;
use crate::domain::pool::{lp_tokens_to_human_readable, LiquidityPool};

/// Indexed state of one pool.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolState {
    pub unlocked: U256,
    pub locked: U256,
    /// Value of open positions; never negative.
    pub position: Fixed,
    /// LP token supply.
    pub balance: U256,
    /// Underlying value of the LP supply.
    pub value: U256,
    pub value_week_ago: U256,
    pub underlying_price: Option<U256>,
    pub timestamp: DateTime<Utc>,
    pub block_number: u64,
    pub apy_all_time: f64,
    pub apy_week: f64,
    pub change_all_time: f64,
    pub change_week: f64,
    pub date_week_ago: DateTime<Utc>,
    pub date_genesis: DateTime<Utc>,
}

impl PoolState {
    /// Unlocked capital in underlying units of `pool`.
    #[must_use]
    pub fn unlocked_human(&self, pool: &LiquidityPool) -> f64 {
        pool.underlying().to_human_readable(self.unlocked)
    }

    /// Locked capital in underlying units of `pool`.
    #[must_use]
    pub fn locked_human(&self, pool: &LiquidityPool) -> f64 {
        pool.underlying().to_human_readable(self.locked)
    }

    /// LP supply in whole LP tokens.
    #[must_use]
    pub fn balance_human(&self) -> f64 {
        lp_tokens_to_human_readable(U256Limbs::from(self.balance))
    }
}

impl From<StateResponse> for PoolState {
    fn from(res: StateResponse) -> Self {
        Self {
            unlocked: res.unlocked,
            locked: res.locked,
            position: Fixed::new(res.position, false),
            balance: res.balance,
            value: res.value,
            value_week_ago: res.value_week_ago,
            underlying_price: res.underlying_price,
            timestamp: res.timestamp,
            block_number: res.block_number,
            apy_all_time: res.apy_all_time,
            apy_week: res.apy_week,
            change_all_time: res.change_all_time,
            change_week: res.change_week,
            date_week_ago: res.date_week_ago,
            date_genesis: res.date_genesis,
        }
    }
}
