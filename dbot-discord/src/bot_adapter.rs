//! Wraps serenity's HTTP client and implements [`dbot_core::Bot`]. Production code talks to the Discord
//! REST API; tests can substitute another Bot impl.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{
    Bot as CoreBot, Channel, CommandInvocation, CommandSpec, DbotError, RegisteredCommand, Result,
};
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::http::Http;
use serenity::model::id::{ApplicationId, ChannelId, CommandId, InteractionId};

use crate::adapters::to_create_command;
use crate::config::DiscordConfig;

fn bot_error(e: serenity::Error) -> DbotError {
    DbotError::Bot(e.to_string())
}

/// Thin wrapper around serenity's `Http` that implements dbot-core's Bot trait. Commands are
/// registered globally for the configured application.
pub struct DiscordBotAdapter {
    http: Arc<Http>,
}

impl DiscordBotAdapter {
    /// Creates an adapter with its own HTTP client bound to the application id.
    pub fn new(config: &DiscordConfig) -> Self {
        let http = Http::new(&config.token);
        http.set_application_id(ApplicationId::new(config.app_id));
        Self {
            http: Arc::new(http),
        }
    }
}

#[async_trait]
impl CoreBot for DiscordBotAdapter {
    async fn register_command(&self, spec: &CommandSpec) -> Result<RegisteredCommand> {
        let command = self
            .http
            .create_global_command(&to_create_command(spec))
            .await
            .map_err(bot_error)?;
        Ok(RegisteredCommand {
            id: command.id.get(),
            name: command.name,
        })
    }

    async fn delete_command(&self, command: &RegisteredCommand) -> Result<()> {
        self.http
            .delete_global_command(CommandId::new(command.id))
            .await
            .map_err(bot_error)
    }

    async fn send_message(&self, channel: &Channel, text: &str) -> Result<()> {
        ChannelId::new(channel.id)
            .say(self.http.as_ref(), text)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn respond(&self, invocation: &CommandInvocation, text: &str) -> Result<()> {
        let response =
            CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(text));
        self.http
            .create_interaction_response(
                InteractionId::new(invocation.interaction_id),
                &invocation.token,
                &response,
                Vec::new(),
            )
            .await
            .map_err(bot_error)
    }
}
