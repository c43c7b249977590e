//! Command registration and teardown against a [`Bot`].

use std::collections::HashSet;

use tracing::{error, info, instrument};

use crate::bot::Bot;
use crate::error::{DbotError, Result};
use crate::types::{CommandSpec, RegisteredCommand};

/// Registers `specs` one by one, in order. Duplicate names are rejected before any remote call.
/// The first failure aborts; commands registered before it are left in place.
#[instrument(skip(bot, specs), fields(count = specs.len()))]
pub async fn register_commands(
    bot: &dyn Bot,
    specs: &[CommandSpec],
) -> Result<Vec<RegisteredCommand>> {
    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        if !seen.insert(spec.name.as_str()) {
            return Err(DbotError::Config(format!(
                "duplicate command name: {}",
                spec.name
            )));
        }
    }

    let mut registered = Vec::with_capacity(specs.len());
    for spec in specs {
        let command = bot.register_command(spec).await.map_err(|e| DbotError::Register {
            name: spec.name.clone(),
            reason: e.to_string(),
        })?;
        info!(command = %command.name, command_id = command.id, "Registered command");
        registered.push(command);
    }
    Ok(registered)
}

/// Deletes every registered command exactly once. Keeps going past failures and reports the names
/// that could not be deleted.
#[instrument(skip(bot, registered), fields(count = registered.len()))]
pub async fn unregister_commands(bot: &dyn Bot, registered: &[RegisteredCommand]) -> Result<()> {
    let mut failed = Vec::new();
    for command in registered {
        match bot.delete_command(command).await {
            Ok(()) => info!(command = %command.name, command_id = command.id, "Deleted command"),
            Err(e) => {
                error!(command = %command.name, command_id = command.id, error = %e, "Cannot delete command");
                failed.push(command.name.clone());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(DbotError::Unregister(failed))
    }
}
