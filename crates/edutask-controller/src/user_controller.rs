//! User lookups.

use async_trait::async_trait;
use bson::doc;
use edutask_core::{validate_email_lookup, EdutaskResult, Interface, User};
use edutask_repository::UserLookup;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, warn};

/// User operations exposed to the application.
#[async_trait]
pub trait UserControllerInterface: Interface + Send + Sync {
    /// Returns the user with exactly this email, if any.
    ///
    /// The email must be non-empty and contain `@`; otherwise the call fails
    /// with `InvalidArgument` before any query is issued. The query is an
    /// exact match, `{"email": email}`.
    ///
    /// When several users share the email, a warning is logged and the first
    /// one in store order is returned. Lookup failures are returned as they
    /// came.
    async fn get_user_by_email(&self, email: &str) -> EdutaskResult<Option<User>>;
}

/// Resolves users by email through an injected [`UserLookup`].
///
/// The controller does not own the lookup; it only holds a shared handle
/// to whatever the module wired in.
#[derive(Component)]
#[shaku(interface = UserControllerInterface)]
pub struct UserController {
    #[shaku(inject)]
    users: Arc<dyn UserLookup>,
}

impl UserController {
    /// Creates a user controller over `users`.
    #[must_use]
    pub fn new(users: Arc<dyn UserLookup>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserControllerInterface for UserController {
    async fn get_user_by_email(&self, email: &str) -> EdutaskResult<Option<User>> {
        validate_email_lookup(email)?;
        debug!("Getting user by email: {}", email);

        let users = self.users.find(&doc! { "email": email }).await?;
        if users.len() > 1 {
            warn!("more than one user found with mail {}", email);
        }

        Ok(users.into_iter().next())
    }
}

impl std::fmt::Debug for UserController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserController").finish_non_exhaustive()
    }
}
