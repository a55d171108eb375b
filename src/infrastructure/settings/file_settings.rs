//! Site settings persisted to a TOML file.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::errors::StoreError;
use crate::domain::ports::SettingsPort;
use crate::infrastructure::config::{ConfigError, SiteSettings, StorageManager};

/// File-backed implementation of the site options store.
pub struct FileSettingsStore {
    storage: StorageManager,
    settings: RwLock<SiteSettings>,
}

impl FileSettingsStore {
    /// Loads settings through `storage`.
    ///
    /// # Errors
    /// Returns error if the settings file cannot be read.
    pub fn open(storage: StorageManager) -> Result<Self, StoreError> {
        let settings = storage.load_settings().map_err(into_store_error)?;
        Ok(Self {
            storage,
            settings: RwLock::new(settings),
        })
    }
}

fn into_store_error(error: ConfigError) -> StoreError {
    match error {
        ConfigError::Io(e) => StoreError::Io(e),
        other => StoreError::serialization(other.to_string()),
    }
}

#[async_trait]
impl SettingsPort for FileSettingsStore {
    async fn get_option(&self, name: &str) -> Result<Option<String>, StoreError> {
        Ok(self.settings.read().await.options.get(name).cloned())
    }

    async fn update_option(&self, name: &str, value: &str) -> Result<(), StoreError> {
        let mut settings = self.settings.write().await;
        let mut updated = settings.clone();
        updated.options.insert(name.to_string(), value.to_string());

        self.storage
            .save_settings(&updated)
            .map_err(into_store_error)?;
        *settings = updated;

        debug!(option = %name, value = %value, "Updated site option");
        Ok(())
    }
}
