//! Storage error types.
//!
//! Used by the key-value store client and its callers.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Connection error: {0}")]
    Connection(#[from] redis::RedisError),
    #[error("Unexpected reply to PING: {0}")]
    UnexpectedPing(String),
}
