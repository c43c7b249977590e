//! Canned replies: a fixed text per command name, or per exact message text.

use async_trait::async_trait;
use dbot_core::{Event, Handler, HandlerResponse, Result};

/// Replies with a fixed text to one command name.
pub struct StaticCommandHandler {
    command: String,
    reply: String,
}

impl StaticCommandHandler {
    pub fn new(command: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl Handler for StaticCommandHandler {
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        match event {
            Event::Command(invocation) if invocation.name == self.command => {
                Ok(HandlerResponse::Reply(self.reply.clone()))
            }
            _ => Ok(HandlerResponse::Ignore),
        }
    }
}

/// Replies to messages whose text equals a trigger exactly (no trimming, case-sensitive).
pub struct StaticMessageHandler {
    triggers: Vec<(String, String)>,
}

impl StaticMessageHandler {
    /// Handler with no triggers.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            triggers: Vec::new(),
        }
    }

    /// Adds a trigger; the first matching trigger wins.
    pub fn on(mut self, text: impl Into<String>, reply: impl Into<String>) -> Self {
        self.triggers.push((text.into(), reply.into()));
        self
    }

    /// `ping` and `hello`.
    pub fn with_defaults() -> Self {
        Self::new().on("ping", "Pong 🏓").on("hello", "Choo choo! 🚅")
    }

    fn reply_for(&self, content: &str) -> Option<&str> {
        self.triggers
            .iter()
            .find(|(text, _)| text == content)
            .map(|(_, reply)| reply.as_str())
    }
}

#[async_trait]
impl Handler for StaticMessageHandler {
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let Event::Message(message) = event else {
            return Ok(HandlerResponse::Ignore);
        };
        Ok(match self.reply_for(&message.content) {
            Some(reply) => HandlerResponse::Reply(reply.to_string()),
            None => HandlerResponse::Ignore,
        })
    }
}
