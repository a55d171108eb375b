//! Infrastructure layer with external service adapters.

/// Expiring flag stores.
pub mod cache;
/// Application configuration.
pub mod config;
/// User directory adapters.
pub mod directory;
/// Gravatar existence probe.
pub mod gravatar;
/// Site settings persistence.
pub mod settings;

pub use cache::{DiskTransientStore, MemoryTransientStore};
pub use config::{AppConfig, CacheBackend, CliArgs, Command, LogLevel, StorageManager};
pub use directory::StaticUserDirectory;
pub use gravatar::GravatarClient;
pub use settings::FileSettingsStore;
