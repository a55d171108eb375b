//! Application layer with services, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Avatar services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::UninstallReport;
pub use services::{AvatarHooks, AvatarUrlBuilder, GravatarCheck, SeedResolver};
pub use use_cases::{ResolveAvatarUseCase, UninstallUseCase};
