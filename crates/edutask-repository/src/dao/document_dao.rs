//! Pass-through data access over one collection.

use crate::dao::DocumentCollection;
use bson::Document;
use edutask_core::{id_filter, DocumentId, EdutaskResult, ID_FIELD};
use std::sync::Arc;
use tracing::debug;

/// Data access object for a single collection.
///
/// The DAO performs no validation and no retries. Required fields, field
/// types and uniqueness are declared on the collection out of band (see
/// [`crate::SchemaBootstrap`]) and enforced by the store; a rejected write
/// comes back as the store reported it.
#[derive(Clone)]
pub struct Dao {
    collection: Arc<dyn DocumentCollection>,
}

impl Dao {
    /// Creates a DAO over the given collection capability.
    #[must_use]
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }

    /// Returns the name of the backing collection.
    #[must_use]
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// Inserts `document` and returns it with the store-assigned `_id`.
    ///
    /// Every other field comes back exactly as given, including fields the
    /// collection schema does not mention.
    pub async fn create(&self, mut document: Document) -> EdutaskResult<Document> {
        debug!("DAO[{}]: create", self.collection.name());
        let id = self.collection.insert_one(&document).await?;
        document.insert(ID_FIELD, id);
        Ok(document)
    }

    /// Finds a document by id.
    pub async fn find_by_id(&self, id: &DocumentId) -> EdutaskResult<Option<Document>> {
        debug!("DAO[{}]: find_by_id {}", self.collection.name(), id);
        self.collection.find_one(id_filter(id)).await
    }

    /// Finds every document matching `filter`, in store order.
    pub async fn find(&self, filter: Document) -> EdutaskResult<Vec<Document>> {
        debug!("DAO[{}]: find {}", self.collection.name(), filter);
        self.collection.find(filter).await
    }

    /// Applies an update-operator document (e.g. `{"$set": {...}}`) to the
    /// document with `id`. Returns `true` if a document matched.
    pub async fn update(&self, id: &DocumentId, update: Document) -> EdutaskResult<bool> {
        debug!("DAO[{}]: update {}", self.collection.name(), id);
        let matched = self.collection.update_one(id_filter(id), update).await?;
        Ok(matched > 0)
    }

    /// Deletes the document with `id`. Returns `true` if one was deleted.
    pub async fn delete(&self, id: &DocumentId) -> EdutaskResult<bool> {
        debug!("DAO[{}]: delete {}", self.collection.name(), id);
        let deleted = self.collection.delete_one(id_filter(id)).await?;
        Ok(deleted > 0)
    }

    /// Drops the backing collection, including its indexes.
    pub async fn drop_collection(&self) -> EdutaskResult<()> {
        debug!("DAO[{}]: drop", self.collection.name());
        self.collection.drop_collection().await
    }
}

impl std::fmt::Debug for Dao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dao")
            .field("collection", &self.collection.name())
            .finish()
    }
}
