//! `mockall` doubles for the repository seams.
//!
//! Compiled for this crate's tests and, with the `test-support` feature, for
//! the tests of crates that build on it.

use crate::{DatabaseClientInterface, DocumentCollection, UserLookup};
use async_trait::async_trait;
use bson::{Bson, Document};
use edutask_core::{EdutaskResult, User};
use mockall::mock;
use std::sync::Arc;

mock! {
    pub Collection {}

    #[async_trait]
    impl DocumentCollection for Collection {
        fn name(&self) -> &str;
        async fn insert_one(&self, document: &Document) -> EdutaskResult<Bson>;
        async fn find_one(&self, filter: Document) -> EdutaskResult<Option<Document>>;
        async fn find(&self, filter: Document) -> EdutaskResult<Vec<Document>>;
        async fn update_one(&self, filter: Document, update: Document) -> EdutaskResult<u64>;
        async fn delete_one(&self, filter: Document) -> EdutaskResult<u64>;
        async fn drop_collection(&self) -> EdutaskResult<()>;
    }
}

mock! {
    pub Database {}

    #[async_trait]
    impl DatabaseClientInterface for Database {
        fn document_collection(&self, name: &str) -> Arc<dyn DocumentCollection>;
        async fn health_check(&self) -> EdutaskResult<()>;
    }
}

mock! {
    pub Lookup {}

    #[async_trait]
    impl UserLookup for Lookup {
        async fn find(&self, query: &Document) -> EdutaskResult<Vec<User>>;
    }
}

impl MockCollection {
    /// Creates a mock that answers `name()` with `name` any number of times.
    #[must_use]
    pub fn named(name: &str) -> Self {
        let mut collection = Self::new();
        collection.expect_name().return_const(name.to_string());
        collection
    }
}

impl MockDatabase {
    /// Serves `collection` whenever `name` is requested.
    pub fn serve(
        &mut self,
        name: &'static str,
        collection: impl DocumentCollection + 'static,
    ) -> &mut Self {
        let collection: Arc<dyn DocumentCollection> = Arc::new(collection);
        self.expect_document_collection()
            .withf(move |requested| requested == name)
            .returning(move |_| Arc::clone(&collection));
        self
    }
}
