//! `newbet`: announces a new bet from the invoking user's options.

use async_trait::async_trait;
use dbot_core::{CommandInvocation, Event, Handler, HandlerResponse, Result};
use tracing::debug;

use crate::commands::NEWBET_COMMAND;

/// Formats `<user> started a bet!\n> <title>\n > <outcome-1> OR <outcome-2>`.
///
/// When any of the three options is missing only the first line is sent.
pub struct NewBetHandler;

impl NewBetHandler {
    fn announcement(invocation: &CommandInvocation) -> String {
        let mut text = format!("{} started a bet!\n", invocation.user.username);
        let options = (
            invocation.required_str("title"),
            invocation.required_str("outcome-1"),
            invocation.required_str("outcome-2"),
        );
        match options {
            (Ok(title), Ok(first), Ok(second)) => {
                text.push_str(&format!("> {}\n > {} OR {}", title, first, second));
            }
            (title, first, second) => {
                let missing = [title.err(), first.err(), second.err()];
                for e in missing.iter().flatten() {
                    debug!(error = %e, "newbet option unavailable");
                }
            }
        }
        text
    }
}

#[async_trait]
impl Handler for NewBetHandler {
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        match event {
            Event::Command(invocation) if invocation.name == NEWBET_COMMAND => {
                Ok(HandlerResponse::Reply(Self::announcement(invocation)))
            }
            _ => Ok(HandlerResponse::Ignore),
        }
    }
}
