//! Gateway abstractions.
//!
//! [`Bot`] covers the request/response operations (commands and replies); [`Connection`] covers the
//! persistent event connection. `dbot_discord::DiscordBotAdapter` and `DiscordConnection`
//! implement them over serenity; tests substitute fakes.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Channel, CommandInvocation, CommandSpec, RegisteredCommand};

/// Transport operations used by the registrar and the dispatcher.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Registers one command and returns the server-assigned id.
    async fn register_command(&self, spec: &CommandSpec) -> Result<RegisteredCommand>;
    /// Deletes a previously registered command.
    async fn delete_command(&self, command: &RegisteredCommand) -> Result<()>;
    /// Sends a text message to the given channel.
    async fn send_message(&self, channel: &Channel, text: &str) -> Result<()>;
    /// Replies to a command invocation (interaction response with source).
    async fn respond(&self, invocation: &CommandInvocation, text: &str) -> Result<()>;
}

/// Persistent gateway connection. `open` is called once; `close` once after shutdown is requested.
#[async_trait]
pub trait Connection: Send {
    async fn open(&mut self) -> Result<()>;
    async fn close(&mut self) -> Result<()>;
}
