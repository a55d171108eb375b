//! Domain entity definitions.

mod avatar;
mod cache_entry;
mod identity;
mod seed;

pub use avatar::{
    AvatarDefault, AvatarOption, AvatarRequest, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE, MYSTERY_DEFAULT,
    StyleVariant, absolute_size, clamp_size,
};
pub use cache_entry::CacheEntry;
pub use identity::{CommentRecord, IdentityRef, UserId, UserRecord};
pub use seed::{ANONYMOUS_SEED, Seed};
