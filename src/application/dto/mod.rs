//! Data transfer objects for the application layer.

mod uninstall_dto;

pub use uninstall_dto::UninstallReport;
