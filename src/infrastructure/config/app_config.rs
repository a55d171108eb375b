//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::services::{DEFAULT_CACHE_TTL, DEFAULT_SERVICE_URL};
use crate::domain::entities::UserRecord;
use crate::infrastructure::cache::memory_store::DEFAULT_CAPACITY;
use crate::infrastructure::gravatar::{DEFAULT_PROBE_TIMEOUT, GRAVATAR_BASE_URL};


/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Where Gravatar check results are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Process memory, lost on exit.
    Memory,
    /// JSON file in the cache directory.
    #[default]
    Disk,
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Avataurus rendering service base URL.
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Gravatar base URL used for existence probes.
    #[serde(default = "default_gravatar_url")]
    pub gravatar_url: String,

    /// Probe timeout in seconds.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// How long a probe result is cached, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Cache backend.
    #[serde(default)]
    pub cache: CacheBackend,

    /// Maximum entries kept by the memory backend.
    #[serde(default = "default_memory_cache_capacity")]
    pub memory_cache_capacity: usize,

    /// Users known to the static directory.
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_gravatar_url() -> String {
    GRAVATAR_BASE_URL.to_string()
}

fn default_probe_timeout_secs() -> u64 {
    DEFAULT_PROBE_TIMEOUT.as_secs()
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL.as_secs()
}

fn default_memory_cache_capacity() -> usize {
    DEFAULT_CAPACITY
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(service_url) = &args.service_url {
            self.service_url.clone_from(service_url);
        }
        if let Some(cache) = args.cache {
            self.cache = cache;
        }
    }

    /// Probe timeout as a duration.
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Cache TTL as a duration.
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "avataurus", "avataurus")
            .map(|dirs| dirs.data_dir().join("avataurus.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            service_url: default_service_url(),
            gravatar_url: default_gravatar_url(),
            probe_timeout_secs: default_probe_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
            cache: CacheBackend::default(),
            memory_cache_capacity: default_memory_cache_capacity(),
            users: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UserId;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.service_url, "https://avataurus.com");
        assert_eq!(config.probe_timeout(), Duration::from_secs(2));
        assert_eq!(config.cache_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.cache, CacheBackend::Disk);
        assert!(config.users.is_empty());
    }

    #[test]
    fn test_parse_config_with_users() {
        let toml_content = r#"
            log_level = "debug"
            service_url = "http://localhost:8080"
            cache = "memory"
            cache_ttl_secs = 60

            [[users]]
            id = 1
            email = "admin@example.com"
            display_name = "Admin"

            [[users]]
            id = 2
            email = "editor@example.com"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.service_url, "http://localhost:8080");
        assert_eq!(config.cache, CacheBackend::Memory);
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.probe_timeout_secs, 2);
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[0].id(), UserId(1));
        assert_eq!(config.users[0].display_name(), Some("Admin"));
    }

    #[test]
    fn test_merge_with_args() {
        let args = CliArgs::parse_from([
            "avataurus",
            "--log-level",
            "warn",
            "--service-url",
            "http://avatars.test",
            "--cache",
            "memory",
            "defaults",
        ]);
        let mut config = AppConfig::default();

        config.merge_with_args(&args);

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.service_url, "http://avatars.test");
        assert_eq!(config.cache, CacheBackend::Memory);
        assert_eq!(config.gravatar_url, "https://www.gravatar.com");
    }
}
