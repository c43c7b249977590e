//! Handler that logs every event and its outcome.

use async_trait::async_trait;
use dbot_core::{Event, Handler, HandlerResponse, Result};
use tracing::{debug, instrument};

/// Logs each event in before() and the response in after() at debug level; always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        match event {
            Event::Command(invocation) => debug!(
                user_id = invocation.user.id,
                username = %invocation.user.username,
                command = %invocation.name,
                "Received command"
            ),
            Event::Message(message) => debug!(
                user_id = message.author.id,
                username = %message.author.username,
                channel_id = message.channel.id,
                message_content = %message.content,
                "Received message"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &Event, response: &HandlerResponse) -> Result<()> {
        debug!(kind = event.kind(), response = ?response, "Processed event");
        Ok(())
    }
}
