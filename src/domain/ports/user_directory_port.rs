//! User directory port definition.

use async_trait::async_trait;

use crate::domain::entities::{UserId, UserRecord};
use crate::domain::errors::StoreError;

/// Port for read-only user lookups.
#[async_trait]
pub trait UserDirectoryPort: Send + Sync {
    /// Finds a user by id.
    async fn find_user(&self, id: UserId) -> Result<Option<UserRecord>, StoreError>;
}
