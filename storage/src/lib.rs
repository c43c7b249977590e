//! Storage crate: key-value store connectivity.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`kv_store`] – StoreConfig and KvStore (Redis), used for the startup liveness probe

mod error;
mod kv_store;

pub use error::StorageError;
pub use kv_store::{KvStore, StoreConfig};
