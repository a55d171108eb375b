//! Site settings port definition.

use async_trait::async_trait;

use crate::domain::errors::StoreError;

/// Site option naming the selected default-avatar provider.
pub const AVATAR_DEFAULT_OPTION: &str = "avatar_default";

/// Port for persisted site-wide string options.
#[async_trait]
pub trait SettingsPort: Send + Sync {
    /// Reads an option.
    async fn get_option(&self, name: &str) -> Result<Option<String>, StoreError>;

    /// Writes an option.
    async fn update_option(&self, name: &str, value: &str) -> Result<(), StoreError>;
}
