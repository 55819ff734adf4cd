//! Entry point: load configuration, then run the standings sync.

use clap::Parser;
use standings_sync::{cli::SyncArgs, commands::handle_sync, Result, SyncConfig};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let args = SyncArgs::parse();

    // A missing .env file is fine; real env vars still apply.
    dotenv::dotenv().ok();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let config = SyncConfig::from_env().inspect_err(|e| tracing::error!("{e}"))?;
    tracing::debug!(?config, "Loaded configuration");

    handle_sync(&config, args.into()).await?;

    Ok(())
}
