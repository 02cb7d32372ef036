//! Live prices from the backend.

use serde_json::json;
use tabled::{Table, Tabled};

use super::output;
use crate::error::Result;
use crate::infrastructure::SdkContext;

#[derive(Tabled)]
struct PriceRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Price")]
    price: String,
}

pub async fn execute(context: &SdkContext) -> Result<()> {
    let prices = context.api().live_prices().await?;
    let mut rows: Vec<_> = prices.into_iter().collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    if output::is_json() {
        let prices: serde_json::Map<_, _> = rows
            .iter()
            .map(|(asset, price)| (asset.clone(), json!(price.to_string())))
            .collect();
        output::json_output(json!({ "command": "prices", "prices": prices }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Live prices");
    let rows: Vec<PriceRow> = rows
        .into_iter()
        .map(|(asset, price)| PriceRow {
            asset,
            price: price.normalize().to_string(),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
