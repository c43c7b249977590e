//! # dbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Connection`], [`Handler`], event and
//! command types, command registration, the connection lifecycle and tracing initialization.
//! Transport-agnostic; used by handler-chain, handlers and dbot-discord.

pub mod bot;
pub mod error;
pub mod lifecycle;
pub mod logger;
pub mod registrar;
pub mod types;

pub use bot::{Bot, Connection};
pub use error::{DbotError, HandlerError, Result};
pub use lifecycle::run_lifecycle;
pub use logger::init_tracing;
pub use registrar::{register_commands, unregister_commands};
pub use types::{
    Channel, CommandInvocation, CommandOption, CommandSpec, Event, Handler, HandlerResponse,
    Message, OptionKind, OptionValue, RegisteredCommand, User,
};
