//! Time-boxed existence flag.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Cached result of one existence probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    value: bool,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Creates an entry that expires `ttl` after `now`.
    #[must_use]
    pub fn new(value: bool, ttl: Duration, now: DateTime<Utc>) -> Self {
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { value, expires_at }
    }

    /// Cached flag.
    #[must_use]
    pub const fn value(&self) -> bool {
        self.value
    }

    /// Instant after which the flag is stale.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the entry is stale at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether the entry is stale right now.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
