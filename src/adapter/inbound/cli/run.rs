//! Command dispatch.

use tracing::debug;

use super::command::{Cli, ColorChoice, Commands};
use super::output::{self, OutputConfig};
use super::{balance, market, options, pool, prices, trade};
use crate::domain::pool::LiquidityPool;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::SdkContext;

/// Apply the global output flags.
pub fn configure_output(cli: &Cli) {
    output::configure(OutputConfig::new(cli.json, cli.quiet));
    match cli.color {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}

/// Resolve the configuration: file (or defaults) then flag overrides.
///
/// `-v` raises the log level to debug, `-vv` to trace.
#[allow(clippy::result_large_err)]
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };
    config.apply_overrides(cli.rpc_url.clone(), cli.api_url.clone());
    config.validate()?;

    match cli.verbose {
        0 => {}
        1 => config.logging.level = "debug".into(),
        _ => config.logging.level = "trace".into(),
    }
    Ok(config)
}

/// Run the parsed command against `context`.
pub async fn execute(command: &Commands, context: &SdkContext) -> Result<()> {
    debug!(?command, "Executing command");
    match command {
        Commands::Pools => market::pools(),
        Commands::Tokens => market::tokens(),
        Commands::Status(args) => {
            pool::status(context, &LiquidityPool::from_pool_id(args.pool), args.indexed).await
        }
        Commands::Options(args) => {
            options::on_chain(context, &LiquidityPool::from_pool_id(args.pool)).await
        }
        Commands::LiveOptions => options::live(context).await,
        Commands::Prices => prices::execute(context).await,
        Commands::Balance(args) => balance::execute(context, &args.symbol, &args.owner).await,
        Commands::Quote(args) => trade::quote(context, args).await,
        Commands::Open(args) => trade::open(context, args).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn flag_overrides_win_over_defaults() {
        let cli = Cli::try_parse_from([
            "carmine",
            "--rpc-url",
            "https://custom.rpc",
            "pools",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.rpc_url(), "https://custom.rpc");
    }

    #[test]
    fn verbosity_raises_log_level() {
        let cli = Cli::try_parse_from(["carmine", "-vv", "pools"]).unwrap();
        assert_eq!(load_config(&cli).unwrap().logging.level, "trace");
    }

    #[test]
    fn invalid_flag_url_is_rejected() {
        let cli = Cli::try_parse_from(["carmine", "--api-url", "nope", "pools"]).unwrap();
        assert!(load_config(&cli).is_err());
    }
}
