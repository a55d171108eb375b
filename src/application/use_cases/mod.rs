//! Use case implementations.

mod resolve_avatar_use_case;
mod uninstall_use_case;

pub use resolve_avatar_use_case::ResolveAvatarUseCase;
pub use uninstall_use_case::UninstallUseCase;
