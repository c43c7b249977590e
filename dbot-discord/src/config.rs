//! Minimal Discord connection config: application id and bot token.

use dbot_core::{DbotError, Result};
use serenity::model::gateway::GatewayIntents;

/// Credentials for one Discord application.
#[derive(Clone)]
pub struct DiscordConfig {
    pub app_id: u64,
    pub token: String,
}

impl DiscordConfig {
    /// Builds a config; both values must be non-empty and the app id numeric.
    pub fn new(app_id: &str, token: &str) -> Result<Self> {
        let app_id = app_id
            .trim()
            .parse::<u64>()
            .map_err(|_| DbotError::Config(format!("app id is not a number: {:?}", app_id)))?;
        if app_id == 0 {
            return Err(DbotError::Config("app id must not be 0".to_string()));
        }
        if token.trim().is_empty() {
            return Err(DbotError::Config("bot token is empty".to_string()));
        }
        Ok(Self {
            app_id,
            token: token.to_string(),
        })
    }

    /// Guild messages plus message content, needed to read message text.
    pub fn intents(&self) -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
    }
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("app_id", &self.app_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let config = DiscordConfig::new("1234567890", "test_token").unwrap();
        assert_eq!(config.app_id, 1234567890);
        assert_eq!(config.token, "test_token");
    }

    #[test]
    fn test_new_rejects_bad_app_id() {
        assert!(DiscordConfig::new("", "t").is_err());
        assert!(DiscordConfig::new("abc", "t").is_err());
        assert!(DiscordConfig::new("0", "t").is_err());
    }

    #[test]
    fn test_new_rejects_empty_token() {
        assert!(matches!(
            DiscordConfig::new("1", "  "),
            Err(DbotError::Config(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = DiscordConfig::new("1", "super-secret").unwrap();
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[test]
    fn test_intents_include_message_content() {
        let intents = DiscordConfig::new("1", "t").unwrap().intents();
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGES));
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
    }
}
