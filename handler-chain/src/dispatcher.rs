//! Event dispatcher: event → at most one reply, sent through the transport.

use std::sync::Arc;

use dbot_core::{Bot, Event, HandlerResponse, Result};
use tracing::{error, info, instrument};

use crate::HandlerChain;

/// Maps inbound events to replies via a [`HandlerChain`] and sends them with a [`Bot`].
///
/// Holds no mutable state; clones share the chain and the bot, so one dispatcher can serve events on
/// many tasks at once.
#[derive(Clone)]
pub struct Dispatcher {
    chain: HandlerChain,
    bot: Arc<dyn Bot>,
}

impl Dispatcher {
    pub fn new(chain: HandlerChain, bot: Arc<dyn Bot>) -> Self {
        Self { chain, bot }
    }

    /// Runs the chain and sends the reply, if any: command events get an interaction response,
    /// message events a message in the same channel. Send failures are returned.
    #[instrument(skip(self, event), fields(kind = event.kind()))]
    pub async fn dispatch(&self, event: &Event) -> Result<HandlerResponse> {
        let response = self.chain.handle(event).await?;

        if let HandlerResponse::Reply(text) = &response {
            match event {
                Event::Command(invocation) => {
                    info!(command = %invocation.name, user = %invocation.user.username, "Hit command");
                    self.bot.respond(invocation, text).await?;
                }
                Event::Message(message) => {
                    self.bot.send_message(&message.channel, text).await?;
                }
            }
        }

        Ok(response)
    }

    /// Entry point for the gateway: dispatches and logs any failure so later events keep being served.
    pub async fn handle_event(&self, event: Event) {
        if let Err(e) = self.dispatch(&event).await {
            error!(
                error = %e,
                kind = event.kind(),
                user_id = event.user().id,
                channel_id = event.channel().id,
                "Failed to handle event"
            );
        }
    }
}
