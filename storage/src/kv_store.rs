//! Redis client wrapper. The bot only checks liveness at startup; no reads or writes happen.

use redis::{ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use tracing::{info, instrument};

use crate::error::StorageError;

/// Where the key-value store lives and how to authenticate.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl StoreConfig {
    /// `host:port`, for logging.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn connection_info(&self) -> ConnectionInfo {
        ConnectionInfo {
            addr: ConnectionAddr::Tcp(self.host.clone(), self.port),
            redis: RedisConnectionInfo {
                username: self.username.clone(),
                password: self.password.clone(),
                ..Default::default()
            },
        }
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Redis client for one configured store.
#[derive(Clone)]
pub struct KvStore {
    client: redis::Client,
    addr: String,
}

impl KvStore {
    /// Creates the client. Does not connect yet.
    pub fn new(config: &StoreConfig) -> Result<Self, StorageError> {
        let client = redis::Client::open(config.connection_info())?;
        Ok(Self {
            client,
            addr: config.addr(),
        })
    }

    /// Connects and sends `PING`; anything but `PONG` is an error.
    #[instrument(skip(self), fields(addr = %self.addr))]
    pub async fn ping(&self) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let reply: String = redis::cmd("PING").query_async(&mut conn).await?;
        if reply != "PONG" {
            return Err(StorageError::UnexpectedPing(reply));
        }
        info!("Redis connection established");
        Ok(())
    }
}
