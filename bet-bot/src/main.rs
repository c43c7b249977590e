//! Binary for the Discord bet bot.

use anyhow::Result;
use bet_bot::{run_bot, spawn_signal_listener, BotConfig, Cli, Commands};
use clap::Parser;
use dbot_core::init_tracing;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let config = BotConfig::from_args(&args)?;
            init_tracing(config.log_file.as_deref())?;

            let shutdown = CancellationToken::new();
            spawn_signal_listener(shutdown.clone());
            run_bot(&config, shutdown).await
        }
    }
}
