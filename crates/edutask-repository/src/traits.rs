//! Capability traits consumed by the controller layer.

use async_trait::async_trait;
use bson::Document;
use edutask_core::{EdutaskResult, Interface, User};

/// Lookup capability over stored users.
///
/// `query` is an exact-match filter (field name to value). Results come
/// back in the order the store returned them; store errors are returned
/// as they are.
#[async_trait]
pub trait UserLookup: Interface + Send + Sync {
    /// Finds every user matching `query`.
    async fn find(&self, query: &Document) -> EdutaskResult<Vec<User>>;
}
