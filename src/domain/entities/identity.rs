//! User identity references accepted by the avatar resolver.

use serde::{Deserialize, Serialize};

/// Numeric user identifier as assigned by the host site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// Raw numeric id.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Hosts use `0` for "no user" on guest comments.
    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A registered user as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id: UserId,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl UserRecord {
    /// Creates a record without a display name.
    #[must_use]
    pub fn new(id: impl Into<UserId>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Host-assigned id.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Registered email, possibly empty.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Name shown on the site.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// A comment, possibly left by a guest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    #[serde(default)]
    user_id: Option<UserId>,
    #[serde(default)]
    author_email: Option<String>,
}

impl CommentRecord {
    /// Guest comment with no email.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Links the comment to a registered user. `0` means a guest.
    #[must_use]
    pub fn with_user_id(mut self, id: impl Into<UserId>) -> Self {
        self.user_id = Some(id.into());
        self
    }

    /// Sets the email typed into the comment form.
    #[must_use]
    pub fn with_author_email(mut self, email: impl Into<String>) -> Self {
        self.author_email = Some(email.into());
        self
    }

    /// Returns the registered author, if the comment is linked to one.
    #[must_use]
    pub fn linked_user(&self) -> Option<UserId> {
        self.user_id.filter(|id| !id.is_unset())
    }

    /// Email the commenter typed into the comment form.
    #[must_use]
    pub fn author_email(&self) -> Option<&str> {
        self.author_email.as_deref()
    }
}

/// Anything the host may hand over when it needs an avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityRef {
    /// Numeric user id, resolved through the user directory.
    Id(UserId),
    /// Raw email string, used as-is.
    Email(String),
    /// Full user record.
    User(UserRecord),
    /// Comment record, linked to a user or left by a guest.
    Comment(CommentRecord),
}

impl IdentityRef {
    /// Interprets free-form input the way hosts do: all-digit input is a user
    /// id, anything else is an email candidate.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if !trimmed.is_empty()
            && trimmed.bytes().all(|b| b.is_ascii_digit())
            && let Ok(id) = trimmed.parse::<u64>()
        {
            return Self::Id(UserId(id));
        }
        Self::Email(input.to_string())
    }
}

impl From<UserId> for IdentityRef {
    fn from(value: UserId) -> Self {
        Self::Id(value)
    }
}

impl From<&str> for IdentityRef {
    fn from(value: &str) -> Self {
        Self::Email(value.to_string())
    }
}

impl From<String> for IdentityRef {
    fn from(value: String) -> Self {
        Self::Email(value)
    }
}

impl From<UserRecord> for IdentityRef {
    fn from(value: UserRecord) -> Self {
        Self::User(value)
    }
}

impl From<CommentRecord> for IdentityRef {
    fn from(value: CommentRecord) -> Self {
        Self::Comment(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_numeric_is_user_id() {
        assert_eq!(IdentityRef::from_input("42"), IdentityRef::Id(UserId(42)));
        assert_eq!(IdentityRef::from_input(" 7 "), IdentityRef::Id(UserId(7)));
    }

    #[test]
    fn test_from_input_email_is_kept_verbatim() {
        assert_eq!(
            IdentityRef::from_input(" Jane@Example.com "),
            IdentityRef::Email(" Jane@Example.com ".to_string())
        );
    }

    #[test]
    fn test_from_input_overflowing_digits_fall_back_to_email() {
        let input = "99999999999999999999999";
        assert_eq!(
            IdentityRef::from_input(input),
            IdentityRef::Email(input.to_string())
        );
    }

    #[test]
    fn test_comment_with_zero_user_id_is_unlinked() {
        let comment = CommentRecord::new().with_user_id(0_u64);
        assert_eq!(comment.linked_user(), None);

        let comment = CommentRecord::new().with_user_id(5_u64);
        assert_eq!(comment.linked_user(), Some(UserId(5)));
    }

    #[test]
    fn test_user_record_deserializes_without_display_name() {
        let user: UserRecord = toml::from_str("id = 3\nemail = \"a@b.com\"").unwrap();
        assert_eq!(user.id(), UserId(3));
        assert_eq!(user.email(), "a@b.com");
        assert_eq!(user.display_name(), None);
    }
}
