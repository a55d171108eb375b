//! Cached check for an existing Gravatar.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::domain::entities::Seed;
use crate::domain::ports::{ExistenceProbePort, TransientStorePort};

/// Namespace for every cache key this crate writes.
pub const CACHE_KEY_PREFIX: &str = "avataurus_grav_";

/// How long a probe result is trusted.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Builds the cache key for a seed hash.
#[must_use]
pub fn cache_key(hash: &str) -> String {
    format!("{CACHE_KEY_PREFIX}{hash}")
}

/// Answers "does this user already have a Gravatar?" with at most one probe
/// per seed per TTL window.
#[derive(Clone)]
pub struct GravatarCheck {
    store: Arc<dyn TransientStorePort>,
    probe: Arc<dyn ExistenceProbePort>,
    ttl: Duration,
}

impl GravatarCheck {
    /// Creates a check with the default 24 hour TTL.
    #[must_use]
    pub fn new(store: Arc<dyn TransientStorePort>, probe: Arc<dyn ExistenceProbePort>) -> Self {
        Self {
            store,
            probe,
            ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Overrides the cache TTL.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns whether `seed` has an external avatar.
    ///
    /// The anonymous seed never touches the cache or the network. Store
    /// failures degrade to a fresh probe; probe failures count as "no avatar"
    /// and are cached like any other result.
    pub async fn has_external_avatar(&self, seed: &Seed) -> bool {
        if seed.is_anonymous() {
            return false;
        }

        let hash = seed.hash_hex();
        let key = cache_key(&hash);

        match self.store.get(&key).await {
            Ok(Some(cached)) => {
                trace!(seed_hash = %hash, cached, "Gravatar check cache hit");
                return cached;
            }
            Ok(None) => trace!(seed_hash = %hash, "Gravatar check cache miss"),
            Err(e) => warn!(key = %key, error = %e, "Failed to read cached Gravatar check"),
        }

        let exists = self.probe.probe(&hash).await;
        debug!(seed_hash = %hash, exists, "Gravatar probe completed");

        if let Err(e) = self.store.set(&key, exists, self.ttl).await {
            warn!(key = %key, error = %e, "Failed to cache Gravatar check");
        }

        exists
    }
}
