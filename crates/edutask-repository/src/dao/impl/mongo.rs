//! MongoDB implementation of [`DocumentCollection`].

use crate::dao::DocumentCollection;
use async_trait::async_trait;
use bson::{Bson, Document};
use edutask_core::EdutaskResult;
use futures::TryStreamExt;
use mongodb::Collection;
use tracing::trace;

/// [`DocumentCollection`] backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoCollection {
    inner: Collection<Document>,
}

impl MongoCollection {
    /// Wraps a driver collection handle.
    #[must_use]
    pub fn new(inner: Collection<Document>) -> Self {
        Self { inner }
    }

    /// Returns the underlying driver handle.
    #[must_use]
    pub fn inner(&self) -> &Collection<Document> {
        &self.inner
    }
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn insert_one(&self, document: &Document) -> EdutaskResult<Bson> {
        trace!("insertOne into {}", self.inner.name());
        let result = self.inner.insert_one(document).await?;
        Ok(result.inserted_id)
    }

    async fn find_one(&self, filter: Document) -> EdutaskResult<Option<Document>> {
        trace!("findOne on {}: {}", self.inner.name(), filter);
        Ok(self.inner.find_one(filter).await?)
    }

    async fn find(&self, filter: Document) -> EdutaskResult<Vec<Document>> {
        trace!("find on {}: {}", self.inner.name(), filter);
        let cursor = self.inner.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update_one(&self, filter: Document, update: Document) -> EdutaskResult<u64> {
        trace!("updateOne on {}: {} -> {}", self.inner.name(), filter, update);
        let result = self.inner.update_one(filter, update).await?;
        Ok(result.matched_count)
    }

    async fn delete_one(&self, filter: Document) -> EdutaskResult<u64> {
        trace!("deleteOne on {}: {}", self.inner.name(), filter);
        let result = self.inner.delete_one(filter).await?;
        Ok(result.deleted_count)
    }

    async fn drop_collection(&self) -> EdutaskResult<()> {
        trace!("drop {}", self.inner.name());
        Ok(self.inner.drop().await?)
    }
}

impl std::fmt::Debug for MongoCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoCollection")
            .field("namespace", &self.inner.namespace().to_string())
            .finish()
    }
}
