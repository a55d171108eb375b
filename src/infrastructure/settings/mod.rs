//! Site settings adapters.

pub mod file_settings;

pub use file_settings::FileSettingsStore;
