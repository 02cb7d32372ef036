use anyhow::Context;
use carmine::adapter::inbound::cli::{output, run, Cli};
use carmine::infrastructure::SdkContext;
use clap::Parser;
use tracing::info;

async fn run_cli(cli: Cli) -> anyhow::Result<()> {
    run::configure_output(&cli);

    let config = run::load_config(&cli).context("failed to load configuration")?;
    config.init_logging();
    info!(rpc_url = config.rpc_url(), api_url = config.api_url(), "carmine starting");

    let context = SdkContext::new(config);
    run::execute(&cli.command, &context).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    if let Err(err) = run_cli(Cli::parse()).await {
        output::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
