//! Gateway connection backed by a serenity `Client`.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Connection, DbotError, Result};
use serenity::gateway::ShardManager;
use serenity::model::id::ApplicationId;
use serenity::Client;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument};

use crate::config::DiscordConfig;
use crate::event_handler::DiscordEventHandler;

type GatewayTask = JoinHandle<std::result::Result<(), serenity::Error>>;

/// Runs the serenity client on a background task between `open` and `close`.
///
/// If the gateway task ends with an error, `shutdown` is cancelled so the lifecycle does not wait on
/// a dead connection, and `close` returns that error.
pub struct DiscordConnection {
    config: DiscordConfig,
    handler: DiscordEventHandler,
    shutdown: CancellationToken,
    shard_manager: Option<Arc<ShardManager>>,
    task: Option<GatewayTask>,
}

impl DiscordConnection {
    pub fn new(
        config: DiscordConfig,
        handler: DiscordEventHandler,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            config,
            handler,
            shutdown,
            shard_manager: None,
            task: None,
        }
    }
}

#[async_trait]
impl Connection for DiscordConnection {
    #[instrument(skip(self), fields(app_id = self.config.app_id))]
    async fn open(&mut self) -> Result<()> {
        if self.task.is_some() {
            return Err(DbotError::Connection("already open".to_string()));
        }

        let mut client = Client::builder(&self.config.token, self.config.intents())
            .application_id(ApplicationId::new(self.config.app_id))
            .event_handler(self.handler.clone())
            .await
            .map_err(|e| DbotError::Connection(e.to_string()))?;

        self.shard_manager = Some(client.shard_manager.clone());
        let shutdown = self.shutdown.clone();
        self.task = Some(tokio::spawn(async move {
            let result = client.start().await;
            if let Err(e) = &result {
                error!(error = %e, "Error while connecting to gateway");
                shutdown.cancel();
            }
            result
        }));

        info!("Gateway connection started");
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(shard_manager) = self.shard_manager.take() {
            shard_manager.shutdown_all().await;
        }
        if let Some(task) = self.task.take() {
            task.await
                .map_err(|e| DbotError::Connection(e.to_string()))?
                .map_err(|e| DbotError::Connection(format!("gateway stopped: {}", e)))?;
        }
        Ok(())
    }
}
