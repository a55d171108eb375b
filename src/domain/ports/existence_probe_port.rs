//! Existence probe port definition.

use async_trait::async_trait;

/// Port for checking whether a third-party avatar exists.
///
/// Implementations fold every failure into `false`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExistenceProbePort: Send + Sync {
    /// Returns true only if the upstream confirms an avatar for `hash`.
    async fn probe(&self, hash: &str) -> bool;
}
