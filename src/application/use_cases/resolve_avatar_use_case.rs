//! Avatar URL resolution use case.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::application::services::{
    AvatarHooks, AvatarUrlBuilder, GravatarCheck, SeedResolver, sanitize_url,
};
use crate::domain::entities::{AvatarDefault, AvatarRequest, IdentityRef, MYSTERY_DEFAULT};
use crate::domain::ports::{AVATAR_DEFAULT_OPTION, SettingsPort};

/// Decides whether Avataurus serves an avatar and builds its URL.
///
/// Constructed once by the host and shared behind an `Arc`.
pub struct ResolveAvatarUseCase {
    seeds: SeedResolver,
    gravatar: GravatarCheck,
    builder: AvatarUrlBuilder,
    settings: Arc<dyn SettingsPort>,
    hooks: AvatarHooks,
}

impl ResolveAvatarUseCase {
    /// Creates new use case with no hooks installed.
    #[must_use]
    pub fn new(
        seeds: SeedResolver,
        gravatar: GravatarCheck,
        builder: AvatarUrlBuilder,
        settings: Arc<dyn SettingsPort>,
    ) -> Self {
        Self {
            seeds,
            gravatar,
            builder,
            settings,
            hooks: AvatarHooks::default(),
        }
    }

    /// Installs caller overrides.
    #[must_use]
    pub fn with_hooks(mut self, hooks: AvatarHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Resolves the avatar URL for `identity`.
    ///
    /// Returns `fallback_url` untouched when the effective default avatar is
    /// not an Avataurus selector, or when the user already has a Gravatar and
    /// `force_default` is not set. Never fails.
    pub async fn execute(
        &self,
        identity: &IdentityRef,
        request: &AvatarRequest,
        fallback_url: &str,
    ) -> String {
        let selector = self.effective_selector(request).await;

        let Some(provider) = AvatarDefault::from_selector(&selector) else {
            trace!(selector = %selector, "Default avatar is not Avataurus, keeping fallback");
            return fallback_url.to_string();
        };

        let seed = self.seeds.resolve(identity).await;

        if !request.force_default && self.gravatar.has_external_avatar(&seed).await {
            debug!(seed_hash = %seed.hash_hex(), "User has a Gravatar, keeping fallback");
            return fallback_url.to_string();
        }

        let seed = self.hooks.apply_seed(seed, identity);
        let variant = self.hooks.apply_variant(provider.variant(), identity);
        let built = self.builder.build(&seed, request.size, variant);
        let overridden = self.hooks.apply_url(built.clone(), identity, request);

        if let Some(url) = sanitize_url(&overridden) {
            debug!(variant = %variant, size = request.effective_size(), "Resolved Avataurus URL");
            return url;
        }

        warn!(url = %overridden, "Rejected avatar URL override, using built URL");
        sanitize_url(&built).unwrap_or(built)
    }

    async fn effective_selector(&self, request: &AvatarRequest) -> String {
        if let Some(selector) = &request.default {
            return selector.clone();
        }

        match self.settings.get_option(AVATAR_DEFAULT_OPTION).await {
            Ok(Some(selector)) => selector,
            Ok(None) => MYSTERY_DEFAULT.to_string(),
            Err(e) => {
                warn!(error = %e, "Failed to read default avatar option");
                MYSTERY_DEFAULT.to_string()
            }
        }
    }
}

impl std::fmt::Debug for ResolveAvatarUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveAvatarUseCase")
            .field("builder", &self.builder)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::cache_key;
    use crate::domain::entities::{CommentRecord, Seed, StyleVariant, UserId, UserRecord};
    use crate::domain::ports::mocks::{
        MockExistenceProbePort, MockSettings, MockTransientStore, MockUserDirectory,
    };
    use url::Url;

    const FALLBACK: &str = "https://secure.gravatar.com/avatar/abc?s=96&d=mm";

    fn probe(times: usize, exists: bool) -> Arc<MockExistenceProbePort> {
        let mut probe = MockExistenceProbePort::new();
        probe.expect_probe().times(times).returning(move |_| exists);
        Arc::new(probe)
    }

    fn use_case(
        settings: MockSettings,
        store: Arc<MockTransientStore>,
        probe: Arc<MockExistenceProbePort>,
    ) -> ResolveAvatarUseCase {
        let directory =
            MockUserDirectory::new().with_user(UserRecord::new(1_u64, "Member@Example.com"));
        ResolveAvatarUseCase::new(
            SeedResolver::new(Arc::new(directory)),
            GravatarCheck::new(store, probe),
            AvatarUrlBuilder::new(),
            Arc::new(settings),
        )
    }

    #[tokio::test]
    async fn test_foreign_selector_returns_fallback() {
        let uc = use_case(
            MockSettings::with_default_avatar("identicon"),
            Arc::new(MockTransientStore::new()),
            probe(0, false),
        );

        let request = AvatarRequest::new().with_size(1000).with_force_default(true);
        let url = uc.execute(&"a@b.com".into(), &request, FALLBACK).await;

        assert_eq!(url, FALLBACK);
    }

    #[tokio::test]
    async fn test_unset_option_means_mystery() {
        let uc = use_case(
            MockSettings::new(),
            Arc::new(MockTransientStore::new()),
            probe(0, false),
        );

        let url = uc
            .execute(&"a@b.com".into(), &AvatarRequest::new(), FALLBACK)
            .await;

        assert_eq!(url, FALLBACK);
    }

    #[tokio::test]
    async fn test_unreadable_option_means_mystery() {
        let uc = use_case(
            MockSettings::failing(),
            Arc::new(MockTransientStore::new()),
            probe(0, false),
        );

        let url = uc
            .execute(&"a@b.com".into(), &AvatarRequest::new(), FALLBACK)
            .await;

        assert_eq!(url, FALLBACK);
    }

    #[tokio::test]
    async fn test_forced_initial_variant() {
        let uc = use_case(
            MockSettings::new(),
            Arc::new(MockTransientStore::new()),
            probe(0, true),
        );

        let request = AvatarRequest::new()
            .with_default("avataurus_initial")
            .with_force_default(true)
            .with_size(96);
        let url = uc.execute(&"a@b.com".into(), &request, FALLBACK).await;

        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.path(), "/a%40b.com");
        assert_eq!(parsed.query(), Some("size=96&variant=initial"));
    }

    #[tokio::test]
    async fn test_per_call_selector_overrides_site_option() {
        let uc = use_case(
            MockSettings::with_default_avatar("avataurus_initial"),
            Arc::new(MockTransientStore::new()),
            probe(1, false),
        );

        let request = AvatarRequest::new().with_default("avataurus");
        let url = uc.execute(&"a@b.com".into(), &request, FALLBACK).await;

        assert_eq!(url, "https://avataurus.com/a%40b.com?size=96&variant=face");
    }

    #[tokio::test]
    async fn test_existing_gravatar_is_respected() {
        let uc = use_case(
            MockSettings::with_default_avatar("avataurus"),
            Arc::new(MockTransientStore::new()),
            probe(1, true),
        );

        let url = uc
            .execute(&"a@b.com".into(), &AvatarRequest::new(), FALLBACK)
            .await;

        assert_eq!(url, FALLBACK);
    }

    #[tokio::test]
    async fn test_gravatar_check_is_cached_across_calls() {
        let store = Arc::new(MockTransientStore::new());
        let uc = use_case(
            MockSettings::with_default_avatar("avataurus"),
            store.clone(),
            probe(1, false),
        );

        let identity = IdentityRef::Id(UserId(1));
        let first = uc.execute(&identity, &AvatarRequest::new(), FALLBACK).await;
        let second = uc.execute(&identity, &AvatarRequest::new(), FALLBACK).await;

        assert_eq!(first, second);
        assert_eq!(
            first,
            "https://avataurus.com/member%40example.com?size=96&variant=face"
        );
        let key = cache_key(&Seed::from_email("member@example.com").hash_hex());
        assert!(store.entry(&key).is_some());
    }

    #[tokio::test]
    async fn test_anonymous_comment_skips_probe() {
        let uc = use_case(
            MockSettings::with_default_avatar("avataurus"),
            Arc::new(MockTransientStore::new()),
            probe(0, true),
        );

        let url = uc
            .execute(
                &CommentRecord::new().into(),
                &AvatarRequest::new().with_size(8),
                FALLBACK,
            )
            .await;

        assert_eq!(url, "https://avataurus.com/anonymous?size=16&variant=face");
    }

    #[tokio::test]
    async fn test_hooks_apply_in_order() {
        let hooks = AvatarHooks::new()
            .with_seed_hook(|_, _| Seed::new_unchecked("custom seed"))
            .with_variant_hook(|_, _| StyleVariant::Initial)
            .with_url_hook(|url, _, request| {
                assert!(url.contains("custom%20seed"));
                assert!(url.ends_with("variant=initial"));
                format!("{url}&dpr={}", if request.force_default { 2 } else { 1 })
            });
        let uc = use_case(
            MockSettings::with_default_avatar("avataurus"),
            Arc::new(MockTransientStore::new()),
            probe(0, false),
        )
        .with_hooks(hooks);

        let request = AvatarRequest::new().with_force_default(true);
        let url = uc.execute(&"a@b.com".into(), &request, FALLBACK).await;

        assert_eq!(
            url,
            "https://avataurus.com/custom%20seed?size=96&variant=initial&dpr=2"
        );
    }

    #[tokio::test]
    async fn test_unsafe_url_override_is_rejected() {
        let hooks = AvatarHooks::new().with_url_hook(|_, _, _| "javascript:alert(1)".to_string());
        let uc = use_case(
            MockSettings::with_default_avatar("avataurus"),
            Arc::new(MockTransientStore::new()),
            probe(0, false),
        )
        .with_hooks(hooks);

        let request = AvatarRequest::new().with_force_default(true);
        let url = uc.execute(&"a@b.com".into(), &request, FALLBACK).await;

        assert_eq!(url, "https://avataurus.com/a%40b.com?size=96&variant=face");
    }
}
