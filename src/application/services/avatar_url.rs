//! Avataurus service URL construction.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::domain::entities::{Seed, StyleVariant, clamp_size};

/// Public Avataurus rendering service.
pub const DEFAULT_SERVICE_URL: &str = "https://avataurus.com";

/// Everything except RFC 3986 unreserved characters.
const SEED_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Builds avatar URLs on a configurable service base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUrlBuilder {
    base_url: String,
}

impl AvatarUrlBuilder {
    /// Creates a builder for the public service.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_SERVICE_URL)
    }

    /// Creates a builder for a custom service base.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Service base without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `<base>/<encoded seed>?size=<n>&variant=<v>`.
    ///
    /// The size is defaulted and clamped here, so callers may pass the raw
    /// request value.
    #[must_use]
    pub fn build(&self, seed: &Seed, size: Option<u32>, variant: StyleVariant) -> String {
        let size = clamp_size(size);
        let encoded = utf8_percent_encode(seed.as_str(), SEED_SEGMENT);
        format!("{}/{encoded}?size={size}&variant={variant}", self.base_url)
    }
}

impl Default for AvatarUrlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the URL if it is an absolute `http`/`https` URL, else `None`.
#[must_use]
pub fn sanitize_url(candidate: &str) -> Option<String> {
    let parsed = Url::parse(candidate.trim()).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| parsed.into())
}
