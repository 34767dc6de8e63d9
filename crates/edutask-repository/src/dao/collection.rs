//! The collection capability consumed by the DAO.

use async_trait::async_trait;
use bson::{Bson, Document};
use edutask_core::{EdutaskResult, Interface};

/// Low-level access to one collection of open-schema documents.
///
/// Implementations issue exactly one store request per call and report
/// store failures as they are, without retrying. Constraint enforcement
/// (required fields, types, unique keys) belongs to the store.
#[async_trait]
pub trait DocumentCollection: Interface + Send + Sync {
    /// Returns the collection name.
    fn name(&self) -> &str;

    /// Inserts a document and returns the identifier the store kept for it.
    async fn insert_one(&self, document: &Document) -> EdutaskResult<Bson>;

    /// Returns the first document matching `filter`.
    async fn find_one(&self, filter: Document) -> EdutaskResult<Option<Document>>;

    /// Returns every document matching `filter`, in store order.
    async fn find(&self, filter: Document) -> EdutaskResult<Vec<Document>>;

    /// Applies `update` to the first document matching `filter`.
    /// Returns the number of matched documents.
    async fn update_one(&self, filter: Document, update: Document) -> EdutaskResult<u64>;

    /// Deletes the first document matching `filter`.
    /// Returns the number of deleted documents.
    async fn delete_one(&self, filter: Document) -> EdutaskResult<u64>;

    /// Drops the whole collection.
    async fn drop_collection(&self) -> EdutaskResult<()>;
}
