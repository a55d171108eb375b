//! Caller-supplied overrides applied while building an avatar URL.

use crate::domain::entities::{AvatarRequest, IdentityRef, Seed, StyleVariant};

/// Replaces the seed before the URL is built.
pub type SeedHook = Box<dyn Fn(Seed, &IdentityRef) -> Seed + Send + Sync>;
/// Replaces the style variant before the URL is built.
pub type VariantHook = Box<dyn Fn(StyleVariant, &IdentityRef) -> StyleVariant + Send + Sync>;
/// Replaces the finished URL.
pub type UrlHook = Box<dyn Fn(String, &IdentityRef, &AvatarRequest) -> String + Send + Sync>;

/// Set of optional overrides. Unset hooks pass values through unchanged.
#[derive(Default)]
pub struct AvatarHooks {
    seed: Option<SeedHook>,
    variant: Option<VariantHook>,
    url: Option<UrlHook>,
}

impl AvatarHooks {
    /// Creates hooks that change nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrites the resolved seed.
    #[must_use]
    pub fn with_seed_hook(
        mut self,
        hook: impl Fn(Seed, &IdentityRef) -> Seed + Send + Sync + 'static,
    ) -> Self {
        self.seed = Some(Box::new(hook));
        self
    }

    /// Rewrites the style variant picked from the selector.
    #[must_use]
    pub fn with_variant_hook(
        mut self,
        hook: impl Fn(StyleVariant, &IdentityRef) -> StyleVariant + Send + Sync + 'static,
    ) -> Self {
        self.variant = Some(Box::new(hook));
        self
    }

    /// Rewrites the built URL. The result is still sanitized.
    #[must_use]
    pub fn with_url_hook(
        mut self,
        hook: impl Fn(String, &IdentityRef, &AvatarRequest) -> String + Send + Sync + 'static,
    ) -> Self {
        self.url = Some(Box::new(hook));
        self
    }

    /// Runs the seed hook, if any.
    #[must_use]
    pub fn apply_seed(&self, seed: Seed, identity: &IdentityRef) -> Seed {
        match &self.seed {
            Some(hook) => hook(seed, identity),
            None => seed,
        }
    }

    /// Runs the variant hook, if any.
    #[must_use]
    pub fn apply_variant(&self, variant: StyleVariant, identity: &IdentityRef) -> StyleVariant {
        match &self.variant {
            Some(hook) => hook(variant, identity),
            None => variant,
        }
    }

    /// Runs the URL hook, if any.
    #[must_use]
    pub fn apply_url(
        &self,
        url: String,
        identity: &IdentityRef,
        request: &AvatarRequest,
    ) -> String {
        match &self.url {
            Some(hook) => hook(url, identity, request),
            None => url,
        }
    }
}

impl std::fmt::Debug for AvatarHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarHooks")
            .field("seed", &self.seed.is_some())
            .field("variant", &self.variant.is_some())
            .field("url", &self.url.is_some())
            .finish()
    }
}
