//! CLI parser. Every flag falls back to the environment variable the hosting platform sets.

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bet-bot")]
#[command(about = "Discord bet bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register commands and serve events until Ctrl+C / SIGTERM.
    Run(RunArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// The registered discord app id
    #[arg(long = "appid", env = "APP_ID")]
    pub app_id: Option<String>,

    /// Auth token for discord api
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Remove all commands after shutting down or not
    #[arg(long = "rmcmd", default_value_t = true, action = ArgAction::Set)]
    pub remove_commands: bool,

    /// Redis host addr
    #[arg(long, env = "REDISHOST")]
    pub redis_host: Option<String>,

    /// Redis port
    #[arg(long, env = "REDISPORT")]
    pub redis_port: Option<String>,

    /// Redis store username
    #[arg(long, env = "REDISUSER")]
    pub redis_user: Option<String>,

    /// Redis store password
    #[arg(long, env = "REDISPASSWORD", hide_env_values = true)]
    pub redis_pass: Option<String>,

    /// Also append logs to this file
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<String>,
}
