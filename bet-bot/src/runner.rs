use std::sync::Arc;

use anyhow::{Context, Result};
use dbot_core::run_lifecycle;
use dbot_discord::{DiscordBotAdapter, DiscordConnection, DiscordEventHandler};
use handler_chain::Dispatcher;
use handlers::default_command_specs;
use storage::KvStore;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use crate::components::build_handler_chain;
use crate::config::BotConfig;

/// Main entry: probe the key-value store, register commands, connect, serve until `shutdown` is
/// cancelled, then tear down.
#[instrument(skip_all, fields(app_id = config.discord.app_id))]
pub async fn run_bot(config: &BotConfig, shutdown: CancellationToken) -> Result<()> {
    match &config.store {
        Some(store_config) => {
            KvStore::new(store_config)?
                .ping()
                .await
                .with_context(|| format!("Failed to connect to Redis at {}", store_config.addr()))?;
        }
        None => info!("No key-value store configured, skipping liveness check"),
    }

    let bot = Arc::new(DiscordBotAdapter::new(&config.discord));
    let dispatcher = Dispatcher::new(build_handler_chain(), bot.clone());
    let mut connection = DiscordConnection::new(
        config.discord.clone(),
        DiscordEventHandler::new(dispatcher),
        shutdown.clone(),
    );

    run_lifecycle(
        bot.as_ref(),
        &mut connection,
        &default_command_specs(),
        config.remove_commands,
        shutdown,
    )
    .await
    .context("Bot stopped with an error")?;

    info!("Bot shut down");
    Ok(())
}
