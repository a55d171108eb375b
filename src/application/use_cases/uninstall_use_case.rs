//! Uninstall cleanup use case.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::dto::UninstallReport;
use crate::application::services::CACHE_KEY_PREFIX;
use crate::domain::entities::{AvatarDefault, MYSTERY_DEFAULT};
use crate::domain::errors::StoreError;
use crate::domain::ports::{AVATAR_DEFAULT_OPTION, SettingsPort, TransientStorePort};

/// Removes every trace of Avataurus from the host.
#[derive(Clone)]
pub struct UninstallUseCase {
    settings: Arc<dyn SettingsPort>,
    store: Arc<dyn TransientStorePort>,
}

impl UninstallUseCase {
    /// Creates new uninstall use case.
    #[must_use]
    pub fn new(settings: Arc<dyn SettingsPort>, store: Arc<dyn TransientStorePort>) -> Self {
        Self { settings, store }
    }

    /// Resets the site default avatar if it points at Avataurus, then drops
    /// all cached Gravatar checks.
    ///
    /// # Errors
    /// Returns error if the settings or the cache store cannot be updated.
    pub async fn execute(&self) -> Result<UninstallReport, StoreError> {
        let current = self.settings.get_option(AVATAR_DEFAULT_OPTION).await?;

        let default_reset = match current.as_deref().and_then(AvatarDefault::from_selector) {
            Some(provider) => {
                self.settings
                    .update_option(AVATAR_DEFAULT_OPTION, MYSTERY_DEFAULT)
                    .await?;
                info!(previous = provider.id(), "Reset default avatar to mystery");
                true
            }
            None => {
                debug!(current = ?current, "Default avatar left untouched");
                false
            }
        };

        let removed_entries = self.store.delete_prefix(CACHE_KEY_PREFIX).await?;
        info!(removed_entries, "Removed cached Gravatar checks");

        Ok(UninstallReport {
            default_reset,
            removed_entries,
        })
    }
}
