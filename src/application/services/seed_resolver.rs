use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::entities::{IdentityRef, Seed, UserId};
use crate::domain::ports::UserDirectoryPort;

/// Maps an identity reference to the email that seeds its avatar.
#[derive(Clone)]
pub struct SeedResolver {
    users: Arc<dyn UserDirectoryPort>,
}

impl SeedResolver {
    /// Creates a resolver backed by the given user directory.
    #[must_use]
    pub fn new(users: Arc<dyn UserDirectoryPort>) -> Self {
        Self { users }
    }

    /// Resolves the seed for `identity`.
    ///
    /// Comments prefer the linked user's email and fall back to the email
    /// typed into the comment form. Anything unresolvable yields the
    /// anonymous sentinel.
    pub async fn resolve(&self, identity: &IdentityRef) -> Seed {
        match identity {
            IdentityRef::Id(id) => seed_or_anonymous(self.lookup_email(*id).await.as_deref()),
            IdentityRef::Email(email) => Seed::from_email(email),
            IdentityRef::User(user) => Seed::from_email(user.email()),
            IdentityRef::Comment(comment) => {
                let linked = match comment.linked_user() {
                    Some(id) => seed_or_anonymous(self.lookup_email(id).await.as_deref()),
                    None => Seed::anonymous(),
                };
                if linked.is_anonymous() {
                    seed_or_anonymous(comment.author_email())
                } else {
                    linked
                }
            }
        }
    }

    async fn lookup_email(&self, id: UserId) -> Option<String> {
        match self.users.find_user(id).await {
            Ok(Some(user)) => Some(user.email().to_string()),
            Ok(None) => {
                trace!(user_id = %id, "No user record for id");
                None
            }
            Err(e) => {
                debug!(user_id = %id, error = %e, "User lookup failed");
                None
            }
        }
    }
}

fn seed_or_anonymous(email: Option<&str>) -> Seed {
    email.map_or_else(Seed::anonymous, Seed::from_email)
}
