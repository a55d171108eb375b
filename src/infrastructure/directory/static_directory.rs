//! User directory backed by a fixed list of records.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::{UserId, UserRecord};
use crate::domain::errors::StoreError;
use crate::domain::ports::UserDirectoryPort;

/// In-memory user table, typically loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticUserDirectory {
    users: HashMap<UserId, UserRecord>,
}

impl StaticUserDirectory {
    /// Builds a directory from records. Later duplicates win.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let users = records.into_iter().map(|user| (user.id(), user)).collect();
        Self { users }
    }

    /// Number of known users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no users are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectoryPort for StaticUserDirectory {
    async fn find_user(&self, id: UserId) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_user() {
        let directory = StaticUserDirectory::from_records([
            UserRecord::new(1_u64, "one@example.com"),
            UserRecord::new(2_u64, "two@example.com"),
        ]);

        let found = tokio_test::block_on(directory.find_user(UserId(2))).unwrap();
        assert_eq!(found.map(|u| u.email().to_string()), Some("two@example.com".to_string()));

        let missing = tokio_test::block_on(directory.find_user(UserId(3))).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let directory = StaticUserDirectory::from_records([
            UserRecord::new(1_u64, "old@example.com"),
            UserRecord::new(1_u64, "new@example.com"),
        ]);

        assert_eq!(directory.len(), 1);
        let found = tokio_test::block_on(directory.find_user(UserId(1))).unwrap();
        assert_eq!(found.unwrap().email(), "new@example.com");
    }
}
