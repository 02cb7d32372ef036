//! Static registry listings: pools and tokens.

use serde_json::json;
use tabled::{Table, Tabled};

use super::output;
use crate::domain::pool::all_liquidity_pools;
use crate::domain::token::all_tokens;
use crate::error::Result;

#[derive(Tabled)]
struct PoolRow {
    #[tabled(rename = "Pool")]
    id: String,
    #[tabled(rename = "Pair")]
    pair: String,
    #[tabled(rename = "Type")]
    option_type: String,
    #[tabled(rename = "Underlying")]
    underlying: &'static str,
    #[tabled(rename = "LP Token")]
    lp_address: String,
}

#[derive(Tabled)]
struct TokenRow {
    #[tabled(rename = "Symbol")]
    symbol: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Decimals")]
    decimals: u8,
    #[tabled(rename = "Address")]
    address: String,
}

/// List every deployed pool.
pub fn pools() -> Result<()> {
    if output::is_json() {
        let pools: Vec<_> = all_liquidity_pools()
            .map(|pool| {
                json!({
                    "id": pool.pool_id().as_str(),
                    "base": pool.base().symbol(),
                    "quote": pool.quote().symbol(),
                    "type": pool.option_type().as_str(),
                    "lp_address": pool.lp_address(),
                })
            })
            .collect();
        output::json_output(json!({ "command": "pools", "pools": pools }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Liquidity pools");

    let rows: Vec<PoolRow> = all_liquidity_pools()
        .map(|pool| PoolRow {
            id: pool.pool_id().to_string(),
            pair: pool.pair().pair_id(),
            option_type: pool.option_type().to_string(),
            underlying: pool.underlying().symbol(),
            lp_address: output::short_address(pool.lp_address()),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    output::hint(&format!(
        "run {} for a pool's capital",
        output::highlight("carmine status <pool>")
    ));
    Ok(())
}

/// List supported tokens.
pub fn tokens() -> Result<()> {
    if output::is_json() {
        let tokens: Vec<_> = all_tokens()
            .iter()
            .map(|token| {
                json!({
                    "symbol": token.symbol(),
                    "name": token.name(),
                    "decimals": token.decimals(),
                    "address": token.address(),
                })
            })
            .collect();
        output::json_output(json!({ "command": "tokens", "tokens": tokens }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Tokens");

    let rows: Vec<TokenRow> = all_tokens()
        .iter()
        .map(|token| TokenRow {
            symbol: token.symbol(),
            name: token.name(),
            decimals: token.decimals(),
            address: output::short_address(token.address()),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
