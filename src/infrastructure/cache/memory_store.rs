//! In-memory expiring flag store.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use lru::LruCache;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::domain::entities::CacheEntry;
use crate::domain::errors::StoreError;
use crate::domain::ports::TransientStorePort;

/// Default maximum number of cached flags.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Bounded LRU of expiring flags, lost on restart.
pub struct MemoryTransientStore {
    entries: Mutex<LruCache<String, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryTransientStore {
    /// Creates a store holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(cap)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Creates a store with the default capacity.
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Number of entries, expired ones included until they are touched.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `(hits, misses)` since creation.
    #[must_use]
    pub fn stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}

impl Default for MemoryTransientStore {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[async_trait]
impl TransientStorePort for MemoryTransientStore {
    async fn get(&self, key: &str) -> Result<Option<bool>, StoreError> {
        let mut entries = self.entries.lock();
        let cached = entries.get(key).copied();
        let value = match cached {
            Some(entry) if entry.is_expired_at(Utc::now()) => {
                entries.pop(key);
                trace!(key = %key, "Memory store entry expired");
                None
            }
            Some(entry) => Some(entry.value()),
            None => None,
        };

        if value.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: bool, ttl: Duration) -> Result<(), StoreError> {
        let entry = CacheEntry::new(value, ttl, Utc::now());
        self.entries.lock().put(key.to_string(), entry);
        trace!(key = %key, value, "Stored flag in memory store");
        Ok(())
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<usize, StoreError> {
        let mut entries = self.entries.lock();
        let doomed: Vec<String> = entries
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &doomed {
            entries.pop(key);
        }

        debug!(prefix = %prefix, removed = doomed.len(), "Cleared memory store prefix");
        Ok(doomed.len())
    }
}
