//! # Discord bet bot application
//!
//! Wires dbot-core, handler-chain, handlers, storage and dbot-discord. Loads config from CLI flags and
//! the environment, checks the key-value store, registers commands and serves until shutdown.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;
pub mod signal;

pub use cli::{Cli, Commands, RunArgs};
pub use components::build_handler_chain;
pub use config::BotConfig;
pub use runner::run_bot;
pub use signal::spawn_signal_listener;
