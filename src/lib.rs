//! Avataurus - deterministic avatars for users without a Gravatar.
//!
//! This crate resolves a user's avatar URL against the Avataurus rendering
//! service, deferring to Gravatar when the user already has one, with a clean
//! split between domain, application services and infrastructure adapters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "avataurus";
