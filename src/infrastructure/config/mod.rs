//! Application configuration.

pub mod app_config;
pub mod args;
pub mod site_settings;
pub mod storage;

pub use app_config::{AppConfig, CacheBackend, LogLevel};
pub use args::{CliArgs, Command};
pub use site_settings::SiteSettings;
pub use storage::{ConfigError, StorageManager};
