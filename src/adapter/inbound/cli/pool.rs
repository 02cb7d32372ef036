//! Pool capital, on chain and indexed.

use serde_json::json;

use super::output;
use crate::domain::pool::LiquidityPool;
use crate::error::Result;
use crate::infrastructure::SdkContext;

/// Show a pool's capital; with `indexed`, also the backend's view.
pub async fn status(context: &SdkContext, pool: &LiquidityPool, indexed: bool) -> Result<()> {
    let status = pool.fetch_pool_status(&context.contracts()).await?;
    let state = if indexed {
        Some(context.api().pool_state(pool.lp_address()).await?)
    } else {
        None
    };
    let symbol = pool.underlying().symbol();

    if output::is_json() {
        let mut value = json!({
            "command": "status",
            "pool": pool.pool_id().as_str(),
            "underlying": symbol,
            "status": status,
        });
        if let Some(state) = &state {
            value["indexed"] = json!({
                "block_number": state.block_number,
                "timestamp": state.timestamp.to_rfc3339(),
                "unlocked": state.unlocked_human(pool),
                "locked": state.locked_human(pool),
                "position": state.position.value(),
                "lp_supply": state.balance_human(),
                "apy_week": state.apy_week,
                "apy_all_time": state.apy_all_time,
            });
        }
        output::json_output(value);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&pool.to_string());
    output::field("unlocked", format!("{:.6} {symbol}", status.unlocked));
    output::field("locked", format!("{:.6} {symbol}", status.locked));
    output::field("position", format!("{:.6} {symbol}", status.position));
    output::field("tvl", output::highlight(format!("{:.6} {symbol}", status.tvl)));

    if let Some(state) = state {
        output::section("Indexed");
        output::field("block", state.block_number);
        output::field("as of", state.timestamp.format("%Y-%m-%d %H:%M:%S UTC"));
        output::field("lp supply", format!("{:.6}", state.balance_human()));
        output::field("apy (week)", signed(state.apy_week));
        output::field("apy (all time)", signed(state.apy_all_time));
    }
    Ok(())
}

fn signed(value: f64) -> String {
    let text = format!("{value:.2}%");
    if value < 0.0 {
        output::negative(text)
    } else {
        output::positive(text)
    }
}
