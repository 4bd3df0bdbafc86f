//! VoxelPlay Bot - hourly account automation daemon
//!
//! Every batch:
//! - reads account tokens from the data file (one per line)
//! - claims progress and triggers a random build for each account
//! - fetches user state, pillar layout, verifies a mission and claims inventory
//! - prints a success/failure table per account
//!
//! then sleeps for the configured interval (one hour by default).

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;
use voxelplay_client::{ClientConfig, VoxelClient};

mod batch;
mod cli;
mod config;
mod context;
mod loader;
mod reporter;
mod runner;
mod scheduler;
#[cfg(test)]
mod test_helpers;

use cli::Cli;
use context::{BotContext, Console};
use scheduler::Scheduler;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = config::load_config(
        cli.config.as_deref(),
        config::default_config_path(),
        &cli.overrides(),
    )?;
    let client = VoxelClient::new(ClientConfig::from_bot_config(&config))?;

    let console = Console::stdout();
    if !cli.no_banner {
        console.banner();
    }

    info!("Using token file {}", config.data_file.display());
    let interval = config.interval();
    let ctx = BotContext::new(config, Arc::new(client), console);

    if cli.once {
        batch::run_batch(&ctx).await;
        return Ok(());
    }

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown requested");
                cancel.cancel();
            }
        }
    });

    Scheduler::new(interval).run(ctx, cancel).await;
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
