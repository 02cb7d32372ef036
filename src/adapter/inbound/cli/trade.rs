//! Premium quotes and trade calldata.

use serde_json::json;

use super::command::{OpenArgs, TradeArgs};
use super::output;
use crate::domain::constants::DEFAULT_TRADE_DEADLINE_SECS;
use crate::domain::fixed::Fixed;
use crate::domain::option::OptionContract;
use crate::domain::pool::LiquidityPool;
use crate::error::Result;
use crate::infrastructure::SdkContext;

fn option_for(args: &TradeArgs) -> Result<OptionContract> {
    Ok(OptionContract::on_pool(
        LiquidityPool::from_pool_id(args.pool),
        args.side.into(),
        args.maturity,
        Fixed::from_f64(args.strike)?,
    ))
}

/// Quote the premium with and without fees.
pub async fn quote(context: &SdkContext, args: &TradeArgs) -> Result<()> {
    let option = option_for(args)?;
    let premia = option
        .get_premia_raw(&context.contracts(), args.size, args.closing)
        .await?;
    let symbol = option.underlying().symbol();

    let Some(premia) = premia else {
        output::error(&format!("no quote for {}", option.option_id()));
        return Ok(());
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "quote",
            "option": option.option_id(),
            "size": args.size,
            "closing": args.closing,
            "premia": premia.with_fees.value(),
            "premia_without_fees": premia.without_fees.value(),
            "symbol": symbol,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&option.to_string());
    output::field("size", format!("{} {}", args.size, option.base().symbol()));
    output::field(
        "premia",
        output::highlight(format!("{:.6} {symbol}", premia.with_fees.value())),
    );
    output::field(
        "without fees",
        format!("{:.6} {symbol}", premia.without_fees.value()),
    );
    Ok(())
}

/// Quote, apply slippage and print the approve and trade-open calls.
pub async fn open(context: &SdkContext, args: &OpenArgs) -> Result<()> {
    let option = option_for(&args.trade)?;
    let Some(premia) = option
        .get_premia(&context.contracts(), args.trade.size, false)
        .await?
    else {
        output::error(&format!("no quote for {}", option.option_id()));
        return Ok(());
    };

    let deadline = args.deadline.unwrap_or(DEFAULT_TRADE_DEADLINE_SECS);
    let calls =
        option.trade_open_with_deadline(args.trade.size, premia, args.slippage, deadline)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "open",
            "option": option.option_id(),
            "premia": premia,
            "calls": calls,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&option.to_string());
    output::field("premia", format!("{premia:.6} {}", option.underlying().symbol()));
    output::field("slippage", args.slippage);
    output::lines(&serde_json::to_string_pretty(&calls)?);
    output::hint("sign and submit these calls with your wallet");
    Ok(())
}
