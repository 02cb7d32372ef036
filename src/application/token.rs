//! Token balance reads.

use super::contracts::Contracts;
use crate::domain::token::Token;
use crate::error::Result;

impl Token {
    /// Balance of `owner` in human units.
    pub async fn fetch_balance(&self, contracts: &Contracts, owner: &str) -> Result<f64> {
        let raw = contracts.erc20(self).balance_of(owner).await?;
        Ok(self.to_human_readable(raw))
    }
}
