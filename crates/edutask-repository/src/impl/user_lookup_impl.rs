//! [`UserLookup`] implementations over the `user` collection.
//!
//! [`UserLookup`]: crate::traits::UserLookup

use crate::{client::DatabaseClientInterface, dao::Dao, traits::UserLookup, USER_COLLECTION};
use async_trait::async_trait;
use bson::Document;
use edutask_core::{EdutaskResult, User};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
impl UserLookup for Dao {
    async fn find(&self, query: &Document) -> EdutaskResult<Vec<User>> {
        debug!("UserLookup: find {}", query);
        let documents = Dao::find(self, query.clone()).await?;

        documents
            .into_iter()
            .map(|document| bson::from_document::<User>(document).map_err(Into::into))
            .collect()
    }
}

/// User lookup component for Shaku DI.
///
/// Resolves the `user` collection from the injected database client.
#[derive(Component)]
#[shaku(interface = UserLookup)]
pub struct UserDao {
    #[shaku(inject)]
    database: Arc<dyn DatabaseClientInterface>,
}

impl UserDao {
    /// Creates a user lookup over `database`.
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseClientInterface>) -> Self {
        Self { database }
    }

    fn dao(&self) -> Dao {
        Dao::new(self.database.document_collection(USER_COLLECTION))
    }
}

#[async_trait]
impl UserLookup for UserDao {
    async fn find(&self, query: &Document) -> EdutaskResult<Vec<User>> {
        UserLookup::find(&self.dao(), query).await
    }
}

impl std::fmt::Debug for UserDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDao").finish_non_exhaustive()
    }
}
