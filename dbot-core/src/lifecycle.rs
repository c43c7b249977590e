//! Connection lifecycle: register, connect, wait for shutdown, tear down.

use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use crate::bot::{Bot, Connection};
use crate::error::Result;
use crate::registrar::{register_commands, unregister_commands};
use crate::types::CommandSpec;

/// Registers `specs`, opens `connection`, then waits on `shutdown`.
///
/// After cancellation, deletes the registered commands when `remove_commands` is set and closes the
/// connection last. Registration and open failures abort before serving.
#[instrument(skip_all, fields(commands = specs.len(), remove_commands = remove_commands))]
pub async fn run_lifecycle<C: Connection>(
    bot: &dyn Bot,
    connection: &mut C,
    specs: &[CommandSpec],
    remove_commands: bool,
    shutdown: CancellationToken,
) -> Result<()> {
    let registered = register_commands(bot, specs).await?;

    connection.open().await?;
    info!("The bot is now running. Press Ctrl+C to exit.");

    shutdown.cancelled().await;
    info!("Shutdown requested");

    let teardown = if remove_commands {
        info!("Removing commands...");
        unregister_commands(bot, &registered).await
    } else {
        Ok(())
    };

    connection.close().await?;
    info!("Connection closed");
    teardown
}
