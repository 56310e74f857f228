//! Record store abstraction
//!
//! Provides a unified interface over the hosted table service and an
//! in-memory backend used by tests and local development.

use async_trait::async_trait;

use crate::types::{Entry, Fields};
use crate::Result;

pub mod hosted;
pub mod memory;

/// Table-scoped record store contract
///
/// Each operation maps to exactly one call against the backing table.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All entries, newest first
    async fn list(&self) -> Result<Vec<Entry>>;

    /// Insert a row built verbatim from the supplied fields
    async fn insert(&self, fields: Fields) -> Result<Vec<Entry>>;

    /// Patch the row matching `id`; no match yields an empty result
    async fn update(&self, id: &str, fields: Fields) -> Result<Vec<Entry>>;

    /// Delete the row matching `id`; no match is a no-op
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Record store configuration
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Hosted {
        url: String,
        key: String,
        table: String,
    },
    Memory,
}

/// Create a record store from config
pub fn create_store(config: StoreConfig) -> Result<Box<dyn RecordStore>> {
    match config {
        StoreConfig::Hosted { url, key, table } => {
            let store = hosted::HostedStore::new(url, key, table)?;
            Ok(Box::new(store))
        }
        StoreConfig::Memory => Ok(Box::new(memory::MemoryStore::new())),
    }
}
