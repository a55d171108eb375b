//! Expiring key-value store port definition.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::StoreError;

/// Port for a host-provided expiring flag store.
#[async_trait]
pub trait TransientStorePort: Send + Sync {
    /// Returns the stored flag, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<bool>, StoreError>;

    /// Stores a flag for `ttl`, replacing any previous entry.
    async fn set(&self, key: &str, value: bool, ttl: Duration) -> Result<(), StoreError>;

    /// Removes every entry whose key starts with `prefix`.
    /// Returns the number of removed entries.
    async fn delete_prefix(&self, prefix: &str) -> Result<usize, StoreError>;
}
