//! Application services.

mod avatar_defaults;
mod avatar_hooks;
mod avatar_url;
mod gravatar_check;
mod seed_resolver;

pub use avatar_defaults::register_default_avatars;
pub use avatar_hooks::{AvatarHooks, SeedHook, UrlHook, VariantHook};
pub use avatar_url::{AvatarUrlBuilder, DEFAULT_SERVICE_URL, sanitize_url};
pub use gravatar_check::{CACHE_KEY_PREFIX, DEFAULT_CACHE_TTL, GravatarCheck, cache_key};
pub use seed_resolver::SeedResolver;
