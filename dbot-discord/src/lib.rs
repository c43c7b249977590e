//! # dbot-discord
//!
//! Discord bot framework layer: adapters between serenity and core types, [`dbot_core::Bot`] and
//! [`dbot_core::Connection`] implementations, the gateway event handler, minimal config.
//! Handles only Discord connectivity and handing events to the dispatcher; no reply logic.

mod adapters;
mod bot_adapter;
mod config;
mod connection;
mod event_handler;

pub use adapters::{
    invocation_from_interaction, message_from_discord, option_type, to_create_command,
    user_from_discord,
};
pub use bot_adapter::DiscordBotAdapter;
pub use config::DiscordConfig;
pub use connection::DiscordConnection;
pub use event_handler::DiscordEventHandler;
