mod existence_probe_port;
mod settings_port;
mod transient_store_port;
mod user_directory_port;

pub use existence_probe_port::ExistenceProbePort;
pub use settings_port::{AVATAR_DEFAULT_OPTION, SettingsPort};
pub use transient_store_port::TransientStorePort;
pub use user_directory_port::UserDirectoryPort;

#[cfg(test)]
pub mod mocks {
    pub use super::existence_probe_port::MockExistenceProbePort;
    pub use super::settings_port::mock::MockSettings;
    pub use super::transient_store_port::mock::MockTransientStore;
    pub use super::user_directory_port::mock::MockUserDirectory;
}
