//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AvatarRequest, IdentityRef, Seed, StyleVariant};
pub use errors::{ProbeError, StoreError};
pub use ports::{ExistenceProbePort, SettingsPort, TransientStorePort, UserDirectoryPort};
