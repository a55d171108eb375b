//! File-backed expiring flag store that survives restarts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use directories::ProjectDirs;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, trace, warn};

use crate::domain::entities::CacheEntry;
use crate::domain::errors::StoreError;
use crate::domain::ports::TransientStorePort;

const STORE_FILE_NAME: &str = "transients.json";

/// Expiring flags persisted as a single JSON document.
///
/// The whole map is kept in memory and rewritten on every change.
pub struct DiskTransientStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl DiskTransientStore {
    /// Opens the store at `path`, dropping expired entries.
    ///
    /// A missing file yields an empty store; a malformed file is discarded.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read.
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        let mut entries = match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<HashMap<String, CacheEntry>>(&bytes) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Discarding malformed store file");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        let now = Utc::now();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        debug!(
            path = %path.display(),
            loaded = entries.len(),
            expired = before - entries.len(),
            "Opened disk store"
        );

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Opens the store in the platform cache directory.
    ///
    /// # Errors
    /// Returns error if the cache directory cannot be determined or read.
    pub async fn default_location() -> Result<Self, StoreError> {
        let path = default_store_path()
            .ok_or_else(|| StoreError::unavailable("failed to determine cache directory"))?;
        Self::open(path).await
    }

    /// Location of the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the file through a uniquely named sibling so concurrent
    /// writers never share a temporary file.
    async fn persist(&self, entries: &HashMap<String, CacheEntry>) -> Result<(), StoreError> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| StoreError::unavailable("store path has no parent directory"))?;
        fs::create_dir_all(parent).await?;

        let bytes = serde_json::to_vec(entries)?;
        let tmp = tempfile::NamedTempFile::new_in(parent)?.into_temp_path();
        fs::write(&tmp, bytes).await?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        trace!(path = %self.path.display(), entries = entries.len(), "Persisted disk store");
        Ok(())
    }
}

fn default_store_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "avataurus", "avataurus")
        .map(|dirs| dirs.cache_dir().join(STORE_FILE_NAME))
}

#[async_trait]
impl TransientStorePort for DiskTransientStore {
    async fn get(&self, key: &str) -> Result<Option<bool>, StoreError> {
        let entries = self.entries.lock().await;
        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(CacheEntry::value))
    }

    async fn set(&self, key: &str, value: bool, ttl: Duration) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        let now = Utc::now();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        entries.insert(key.to_string(), CacheEntry::new(value, ttl, now));
        self.persist(&entries).await
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<usize, StoreError> {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - entries.len();

        if removed > 0 {
            self.persist(&entries).await?;
        }

        debug!(prefix = %prefix, removed, "Cleared disk store prefix");
        Ok(removed)
    }
}
