use async_trait::async_trait;
use dbot_core::{Event, Handler, Result};
use tracing::{debug, instrument};

/// Stops the chain for messages written by automated accounts, so the bot never answers itself or
/// other bots. Command invocations always pass.
pub struct IgnoreBotsHandler;

#[async_trait]
impl Handler for IgnoreBotsHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        match event {
            Event::Message(message) if message.author.is_bot => {
                debug!(author_id = message.author.id, "Ignoring message from bot");
                Ok(false)
            }
            _ => Ok(true),
        }
    }
}
