//! Avatar request parameters, style variants and default-avatar selectors.

use serde::{Deserialize, Serialize};

/// Size used when the caller does not ask for one.
pub const DEFAULT_SIZE: u32 = 96;
/// Smallest size the rendering service is asked for.
pub const MIN_SIZE: u32 = 16;
/// Largest size the rendering service is asked for.
pub const MAX_SIZE: u32 = 512;

/// Neutral selector the host falls back to.
pub const MYSTERY_DEFAULT: &str = "mystery";

/// Clamps a requested size into `[MIN_SIZE, MAX_SIZE]`.
#[must_use]
pub fn clamp_size(size: Option<u32>) -> u32 {
    size.unwrap_or(DEFAULT_SIZE).clamp(MIN_SIZE, MAX_SIZE)
}

/// Folds a raw host-supplied size into the unsigned range: negative values
/// lose their sign and oversized values saturate.
#[must_use]
pub fn absolute_size(raw: i64) -> u32 {
    u32::try_from(raw.unsigned_abs()).unwrap_or(u32::MAX)
}

/// Rendering mode requested from the avatar service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleVariant {
    /// Generated face.
    #[default]
    Face,
    /// Initial letter on a colored background.
    Initial,
}

impl StyleVariant {
    /// Value sent in the `variant` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Face => "face",
            Self::Initial => "initial",
        }
    }
}

impl std::fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default-avatar providers contributed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvatarDefault {
    /// `avataurus`
    Avataurus,
    /// `avataurus_initial`
    AvataurusInitial,
}

impl AvatarDefault {
    /// Every selector this crate handles, in display order.
    pub const ALL: [Self; 2] = [Self::Avataurus, Self::AvataurusInitial];

    /// Selector identifier stored in the site option.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Avataurus => "avataurus",
            Self::AvataurusInitial => "avataurus_initial",
        }
    }

    /// Human-readable label shown in the provider list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Avataurus => "Avataurus (Face)",
            Self::AvataurusInitial => "Avataurus (Initial)",
        }
    }

    /// Style the selector renders with.
    #[must_use]
    pub const fn variant(self) -> StyleVariant {
        match self {
            Self::Avataurus => StyleVariant::Face,
            Self::AvataurusInitial => StyleVariant::Initial,
        }
    }

    /// Matches a selector exactly. Foreign selectors return `None`.
    #[must_use]
    pub fn from_selector(selector: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.id() == selector)
    }
}

/// One selectable entry in the host's default-avatar list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarOption {
    /// Selector stored in the site option.
    pub id: String,
    /// Text shown next to the selector.
    pub label: String,
}

impl AvatarOption {
    /// Creates an entry.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Per-call avatar arguments supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarRequest {
    /// Requested edge length in pixels.
    #[serde(default)]
    pub size: Option<u32>,
    /// Skip the external-avatar check.
    #[serde(default)]
    pub force_default: bool,
    /// Per-call default-avatar selector, overriding the site option.
    #[serde(default)]
    pub default: Option<String>,
}

impl AvatarRequest {
    /// Request with every argument unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested size. Clamping happens when the URL is built.
    #[must_use]
    pub const fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the per-call selector.
    #[must_use]
    pub fn with_default(mut self, selector: impl Into<String>) -> Self {
        self.default = Some(selector.into());
        self
    }

    /// Skips the Gravatar check when `true`.
    #[must_use]
    pub const fn with_force_default(mut self, force: bool) -> Self {
        self.force_default = force;
        self
    }

    /// Size after defaulting and clamping.
    #[must_use]
    pub fn effective_size(&self) -> u32 {
        clamp_size(self.size)
    }
}
