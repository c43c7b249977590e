//! Bot configuration: Discord credentials, teardown policy, optional key-value store, logging.
//! Built once at startup from [`RunArgs`] and passed by reference afterwards.

use anyhow::{bail, Context, Result};
use dbot_discord::DiscordConfig;
use storage::StoreConfig;

use crate::cli::RunArgs;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord: DiscordConfig,
    /// Delete registered commands on shutdown.
    pub remove_commands: bool,
    /// Key-value store to probe at startup; `None` skips the probe.
    pub store: Option<StoreConfig>,
    pub log_file: Option<String>,
}

/// Treats unset and blank values alike; hosting platforms often export empty variables.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl BotConfig {
    /// Validates presence of the required values. No defaults are filled in for them.
    pub fn from_args(args: &RunArgs) -> Result<Self> {
        let Some(app_id) = non_empty(&args.app_id) else {
            bail!("APP_ID (--appid) not set");
        };
        let Some(token) = non_empty(&args.token) else {
            bail!("DISCORD_TOKEN (--token) not set");
        };
        let discord = DiscordConfig::new(app_id, token)?;

        let store = match non_empty(&args.redis_host) {
            None => None,
            Some(host) => {
                let Some(port) = non_empty(&args.redis_port) else {
                    bail!("REDISHOST is set but REDISPORT (--redis-port) is not");
                };
                let port = port
                    .parse::<u16>()
                    .with_context(|| format!("REDISPORT is not a valid port: {}", port))?;
                Some(StoreConfig {
                    host: host.to_string(),
                    port,
                    username: non_empty(&args.redis_user).map(str::to_string),
                    password: args.redis_pass.clone().filter(|p| !p.is_empty()),
                })
            }
        };

        Ok(Self {
            discord,
            remove_commands: args.remove_commands,
            store,
            log_file: non_empty(&args.log_file).map(str::to_string),
        })
    }
}
