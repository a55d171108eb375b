//! TOML files under the platform config directory.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::app_config::AppConfig;
use super::site_settings::SiteSettings;

const CONFIG_FILE_NAME: &str = "config.toml";
const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Errors raised while reading or writing configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no config directory for this user.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A file exists but is not valid TOML for its type.
    #[error("invalid {path}: {source}")]
    Parse {
        /// Offending file.
        path: PathBuf,
        /// Parser diagnostic.
        source: toml::de::Error,
    },
    /// Encoding failure on save.
    #[error("toml serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Locates, reads and writes the binary's configuration and site settings.
pub struct StorageManager {
    dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform config directory.
    ///
    /// # Errors
    /// Returns `ConfigDirNotFound` if the platform provides none.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from("com", "avataurus", "avataurus")
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Uses `dir` instead of the platform directory.
    #[must_use]
    pub const fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of `settings.toml`.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE_NAME)
    }

    /// Reads `config.toml`, or `path_override` when given.
    ///
    /// A missing file means defaults; nothing is written.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not parse.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = path_override.map_or_else(|| self.dir.join(CONFIG_FILE_NAME), Path::to_path_buf);
        read_toml_or_default(&path)
    }

    /// Reads the site settings. A missing file means no options are set.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not parse.
    pub fn load_settings(&self) -> Result<SiteSettings, ConfigError> {
        read_toml_or_default(&self.settings_path())
    }

    /// Replaces the site settings file, creating the directory if needed.
    ///
    /// # Errors
    /// Returns error if the file cannot be written.
    pub fn save_settings(&self, settings: &SiteSettings) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.dir)?;
        write_toml_atomic(&self.settings_path(), settings)
    }
}

fn read_toml_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No file, using defaults");
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_toml_atomic<T: Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(data)?;
    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("settings path has no parent"))?;

    let mut file = tempfile::NamedTempFile::new_in(parent)?;
    file.write_all(content.as_bytes())?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::AVATAR_DEFAULT_OPTION;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_is_default_and_not_written() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("avataurus"));

        let config = manager.load_config(None).unwrap();

        assert_eq!(config.service_url, "https://avataurus.com");
        assert!(!dir.path().join("avataurus").exists());
    }

    #[test]
    fn test_malformed_config_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "service_url = [").unwrap();

        let err = StorageManager::with_dir(dir.path().to_path_buf())
            .load_config(None)
            .unwrap_err();

        assert!(matches!(&err, ConfigError::Parse { path: p, .. } if p == &path));
    }

    #[test]
    fn test_override_path_wins() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "cache_ttl_secs = 10").unwrap();

        let config = StorageManager::with_dir(dir.path().join("unused"))
            .load_config(Some(&custom))
            .unwrap();

        assert_eq!(config.cache_ttl_secs, 10);
        assert_eq!(config.probe_timeout_secs, 2);
    }

    #[test]
    fn test_settings_round_trip_creates_directory() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("nested"));
        assert!(manager.load_settings().unwrap().options.is_empty());

        let mut settings = SiteSettings::default();
        settings
            .options
            .insert(AVATAR_DEFAULT_OPTION.to_string(), "avataurus".to_string());
        manager.save_settings(&settings).unwrap();

        assert_eq!(manager.load_settings().unwrap(), settings);
        let leftovers = fs::read_dir(dir.path().join("nested")).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
