//! Command-line interface definitions.
//!
//! Defines the CLI structure for the carmine binary using `clap`. Every
//! subcommand is read-only: calls that would move funds are printed as
//! calldata, never submitted.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::option::OptionSide;
use crate::domain::pool::PoolId;

/// Carmine options protocol explorer
#[derive(Parser, Debug)]
#[command(name = "carmine")]
#[command(version)]
pub struct Cli {
    /// Config file (TOML); defaults apply when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Starknet JSON-RPC node URL
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Carmine backend URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List deployed liquidity pools
    Pools,

    /// List supported tokens
    Tokens,

    /// Show on-chain capital of a pool
    Status(StatusArgs),

    /// List non-expired options of a pool with premia, read on chain
    Options(PoolArg),

    /// List live options from the backend
    LiveOptions,

    /// Show live prices from the backend
    Prices,

    /// Show a token balance
    Balance(BalanceArgs),

    /// Quote the premium for an option trade
    Quote(TradeArgs),

    /// Print approve and trade calls for opening a position
    Open(OpenArgs),
}

/// A pool identifier such as `eth-usdc-call`.
#[derive(Args, Debug)]
pub struct PoolArg {
    /// Pool identifier, `{base}-{quote}-{call|put}`
    pub pool: PoolId,
}

/// Arguments for `carmine status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Pool identifier, `{base}-{quote}-{call|put}`
    pub pool: PoolId,

    /// Also fetch the indexed state from the backend
    #[arg(long)]
    pub indexed: bool,
}

/// Arguments for `carmine balance`.
#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// Token symbol (ETH, USDC, wBTC, STRK, EKUBO)
    pub symbol: String,

    /// Account address
    pub owner: String,
}

/// Option selection and size.
#[derive(Args, Debug)]
pub struct TradeArgs {
    /// Pool identifier, `{base}-{quote}-{call|put}`
    pub pool: PoolId,

    /// Position side
    #[arg(long, value_enum)]
    pub side: SideArg,

    /// Expiry as a unix timestamp
    #[arg(long)]
    pub maturity: u64,

    /// Strike in quote units
    #[arg(long)]
    pub strike: f64,

    /// Size in base units
    #[arg(long)]
    pub size: f64,

    /// Quote closing an existing position
    #[arg(long)]
    pub closing: bool,
}

/// Arguments for `carmine open`.
#[derive(Args, Debug)]
pub struct OpenArgs {
    #[command(flatten)]
    pub trade: TradeArgs,

    /// Slippage tolerance, 0 to 0.6
    #[arg(long, default_value_t = 0.1)]
    pub slippage: f64,

    /// Seconds until the trade expires
    #[arg(long)]
    pub deadline: Option<u64>,
}

/// Position side argument.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SideArg {
    Long,
    Short,
}

impl From<SideArg> for OptionSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Long => Self::Long,
            SideArg::Short => Self::Short,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pools() {
        let cli = Cli::try_parse_from(["carmine", "pools"]).unwrap();
        assert!(matches!(cli.command, Commands::Pools));
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_status_with_pool_id() {
        let cli = Cli::try_parse_from(["carmine", "status", "btc-usdc-put", "--indexed"]).unwrap();
        match cli.command {
            Commands::Status(args) => {
                assert_eq!(args.pool, PoolId::BtcUsdcPut);
                assert!(args.indexed);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn reject_unknown_pool() {
        assert!(Cli::try_parse_from(["carmine", "options", "doge-usdc-call"]).is_err());
    }

    #[test]
    fn parse_quote() {
        let cli = Cli::try_parse_from([
            "carmine",
            "quote",
            "eth-usdc-call",
            "--side",
            "short",
            "--maturity",
            "1760054399",
            "--strike",
            "4900",
            "--size",
            "0.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Quote(args) => {
                assert!(matches!(args.side, SideArg::Short));
                assert_eq!(args.maturity, 1_760_054_399);
                assert!(!args.closing);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn open_defaults_slippage() {
        let cli = Cli::try_parse_from([
            "carmine",
            "open",
            "eth-usdc-put",
            "--side",
            "long",
            "--maturity",
            "1760054399",
            "--strike",
            "3000",
            "--size",
            "1",
        ])
        .unwrap();
        match cli.command {
            Commands::Open(args) => {
                assert!((args.slippage - 0.1).abs() < f64::EPSILON);
                assert_eq!(args.deadline, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["carmine", "prices", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn color_choice() {
        let cli = Cli::try_parse_from(["carmine", "--color", "never", "tokens"]).unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
    }
}
