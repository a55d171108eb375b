//! Avatar seed derived from a user's email.

/// Seed used when no email can be determined.
pub const ANONYMOUS_SEED: &str = "anonymous";

/// Bytes stripped from both ends of an email: space, tab, newline, carriage
/// return, NUL and vertical tab. Other Unicode whitespace is kept.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Normalized string that deterministically addresses a remote avatar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed(String);

impl Seed {
    /// The sentinel seed.
    #[must_use]
    pub fn anonymous() -> Self {
        Self(ANONYMOUS_SEED.to_string())
    }

    /// Trims and lowercases an email. Empty input yields the sentinel.
    ///
    /// Only ASCII letters are folded so the digest matches the one hosts
    /// compute for the same address.
    #[must_use]
    pub fn from_email(email: &str) -> Self {
        let normalized = email.trim_matches(TRIMMED).to_ascii_lowercase();
        if normalized.is_empty() {
            Self::anonymous()
        } else {
            Self(normalized)
        }
    }

    /// Wraps a value without normalizing it.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Whether this is the sentinel seed.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS_SEED
    }

    /// Borrows the seed text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the seed, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Lowercase hex MD5 digest, as Gravatar addresses avatars.
    #[must_use]
    pub fn hash_hex(&self) -> String {
        format!("{:x}", md5::compute(self.0.as_bytes()))
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
