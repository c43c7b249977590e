//! # Handlers for dbot framework
//!
//! This crate provides handler implementations: bot filtering, logging, canned replies to commands
//! and messages, the `newbet` announcement, and the built-in command definitions.

mod bet;
mod commands;
mod filter;
mod logging;
mod static_reply;

#[cfg(test)]
mod test;

pub use bet::NewBetHandler;
pub use commands::{default_command_specs, NEWBET_COMMAND, TEST_COMMAND};
pub use filter::IgnoreBotsHandler;
pub use logging::LoggingHandler;
pub use static_reply::{StaticCommandHandler, StaticMessageHandler};
