//! serenity event handler: converts gateway events to core events and hands them to the dispatcher.
//! serenity runs each callback on its own task.

use async_trait::async_trait;
use dbot_core::Event;
use handler_chain::Dispatcher;
use serenity::client::{Context, EventHandler};
use serenity::model::application::Interaction;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use tracing::info;

use crate::adapters::{invocation_from_interaction, message_from_discord};

#[derive(Clone)]
pub struct DiscordEventHandler {
    dispatcher: Dispatcher,
}

impl DiscordEventHandler {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl EventHandler for DiscordEventHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            username = %ready.user.name,
            guilds = ready.guilds.len(),
            "Connected to gateway"
        );
    }

    async fn message(&self, _ctx: Context, message: Message) {
        self.dispatcher
            .handle_event(Event::Message(message_from_discord(&message)))
            .await;
    }

    async fn interaction_create(&self, _ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            self.dispatcher
                .handle_event(Event::Command(invocation_from_interaction(&command)))
                .await;
        }
    }
}
