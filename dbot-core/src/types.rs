//! Core types: users, channels, inbound events, command specifications, handler response, and the
//! Handler trait.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::HandlerError;

/// User identity as seen by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Automated account (bot or webhook).
    pub is_bot: bool,
}

/// Channel a message was posted in or a command was invoked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: u64,
}

/// A raw text message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub author: User,
    pub channel: Channel,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Resolved value of a single command option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    User(u64),
    Channel(u64),
}

/// A structured command invocation. `interaction_id` and `token` identify the reply context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandInvocation {
    pub interaction_id: u64,
    pub token: String,
    pub name: String,
    pub options: HashMap<String, OptionValue>,
    pub user: User,
    pub channel: Channel,
}

impl CommandInvocation {
    /// Returns the string value of option `name`. Fails when the option is absent or not a string.
    pub fn required_str(&self, name: &str) -> Result<&str, HandlerError> {
        match self.options.get(name) {
            Some(OptionValue::String(value)) => Ok(value.as_str()),
            Some(_) => Err(HandlerError::OptionType {
                name: name.to_string(),
                expected: "string",
            }),
            None => Err(HandlerError::MissingOption(name.to_string())),
        }
    }
}

/// Inbound event delivered by the gateway; consumed once by the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Command(CommandInvocation),
    Message(Message),
}

impl Event {
    /// User who triggered the event.
    pub fn user(&self) -> &User {
        match self {
            Event::Command(invocation) => &invocation.user,
            Event::Message(message) => &message.author,
        }
    }

    /// Channel the event happened in.
    pub fn channel(&self) -> Channel {
        match self {
            Event::Command(invocation) => invocation.channel,
            Event::Message(message) => message.channel,
        }
    }

    /// Short tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Command(_) => "command",
            Event::Message(_) => "message",
        }
    }
}

/// Type tag of a command option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionKind {
    String,
    Integer,
    Number,
    Boolean,
    User,
    Channel,
}

/// One typed parameter of a [`CommandSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub description: String,
    pub kind: OptionKind,
    pub required: bool,
}

impl CommandOption {
    /// Required string option.
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: OptionKind::String,
            required: true,
        }
    }
}

/// Declarative description of a remotely invocable command, registered ahead of use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    pub options: Vec<CommandOption>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    /// Appends an option; order is preserved when registering.
    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }
}

/// A command the gateway accepted, with its server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredCommand {
    pub id: u64,
    pub name: String,
}

/// Handler result for the chain. `Reply(text)` carries the outbound reply so `after()` can see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no reply.
    Stop,
    /// Event not for this handler; try next.
    Ignore,
    /// Stop the chain and send this reply.
    Reply(String),
}

/// Single handler concept: optional before / handle / after. Chain runs all before, then handle until
/// Stop/Reply, then all after in reverse.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _event: &Event) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the event. Return Stop or Reply to end the handle phase. Default: Ignore.
    async fn handle(&self, _event: &Event) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Ignore)
    }
    /// Runs after the handle phase with the final response.
    async fn after(&self, _event: &Event, _response: &HandlerResponse) -> crate::error::Result<()> {
        Ok(())
    }
}
