//! Option listings, read on chain or from the backend.

use chrono::DateTime;
use serde_json::json;
use tabled::{Table, Tabled};

use super::output;
use crate::domain::option::OptionWithPremia;
use crate::domain::pool::LiquidityPool;
use crate::error::Result;
use crate::infrastructure::SdkContext;

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "Pool")]
    pool: String,
    #[tabled(rename = "Side")]
    side: String,
    #[tabled(rename = "Maturity")]
    maturity: String,
    #[tabled(rename = "Strike")]
    strike: String,
    #[tabled(rename = "Premia")]
    premia: String,
}

fn maturity_label(maturity: u64) -> String {
    i64::try_from(maturity)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map_or_else(|| maturity.to_string(), |dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

fn option_json(option: &OptionWithPremia) -> serde_json::Value {
    let contract = option.option();
    json!({
        "id": contract.option_id(),
        "pool": contract.pool_id().as_str(),
        "side": contract.side().as_str(),
        "type": contract.option_type().as_str(),
        "maturity": contract.maturity(),
        "strike": contract.strike(),
        "premia": option.premia(),
        "premia_symbol": contract.underlying().symbol(),
    })
}

fn render(command: &str, title: &str, options: &[OptionWithPremia]) {
    if output::is_json() {
        let options: Vec<_> = options.iter().map(option_json).collect();
        output::json_output(json!({ "command": command, "options": options }));
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section(title);

    if options.is_empty() {
        output::warning("no options");
        return;
    }

    let rows: Vec<OptionRow> = options
        .iter()
        .map(|option| {
            let contract = option.option();
            OptionRow {
                pool: contract.pool_id().to_string(),
                side: contract.side().to_string(),
                maturity: maturity_label(contract.maturity()),
                strike: format!("{} {}", contract.strike(), contract.quote().symbol()),
                premia: format!(
                    "{:.6} {}",
                    option.premia(),
                    contract.underlying().symbol()
                ),
            }
        })
        .collect();
    output::lines(&Table::new(rows).to_string());
}

/// Non-expired options of one pool, read from the AMM.
pub async fn on_chain(context: &SdkContext, pool: &LiquidityPool) -> Result<()> {
    let options = pool
        .fetch_non_expired_options_with_premia(&context.contracts())
        .await?;
    render("options", &format!("Options of {pool}"), &options);
    Ok(())
}

/// Every live option as indexed by the backend.
pub async fn live(context: &SdkContext) -> Result<()> {
    match context.api().live_options().await? {
        Some(options) => render("live-options", "Live options", &options),
        None => output::error("backend returned no live options"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maturity_is_rendered_as_utc_date() {
        assert_eq!(maturity_label(1_760_054_399), "2025-10-09 23:59");
    }

    #[test]
    fn out_of_range_maturity_falls_back_to_number() {
        assert_eq!(maturity_label(u64::MAX), u64::MAX.to_string());
    }
}
