//! Todo item operations.

use crate::controller::Controller;
use async_trait::async_trait;
use bson::doc;
use edutask_core::{EdutaskResult, Interface, TodoItem};
use edutask_repository::{Dao, DatabaseClientInterface, TODO_COLLECTION};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Typed operations on the `todo` collection.
#[async_trait]
pub trait TodoControllerInterface: Interface + Send + Sync {
    /// Stores a new item. The returned item carries its id.
    async fn create_todo(&self, item: TodoItem) -> EdutaskResult<TodoItem>;

    /// Marks the item with `id` as done or not done.
    async fn set_done(&self, id: &str, done: bool) -> EdutaskResult<TodoItem>;

    /// Returns every item.
    async fn list(&self) -> EdutaskResult<Vec<TodoItem>>;
}

/// Todo controller component for Shaku DI.
#[derive(Component)]
#[shaku(interface = TodoControllerInterface)]
pub struct TodoController {
    #[shaku(inject)]
    database: Arc<dyn DatabaseClientInterface>,
}

impl TodoController {
    /// Creates a todo controller over `database`.
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseClientInterface>) -> Self {
        Self { database }
    }

    /// Returns the generic controller for untyped access.
    #[must_use]
    pub fn controller(&self) -> Controller {
        let dao = Dao::new(self.database.document_collection(TODO_COLLECTION));
        Controller::new(dao, "Todo")
    }
}

#[async_trait]
impl TodoControllerInterface for TodoController {
    async fn create_todo(&self, item: TodoItem) -> EdutaskResult<TodoItem> {
        let created = self.controller().create(item.into_document()).await?;
        TodoItem::try_from(created)
    }

    async fn set_done(&self, id: &str, done: bool) -> EdutaskResult<TodoItem> {
        debug!("Setting todo {} done={}", id, done);
        let updated = self.controller().update(id, doc! { "done": done }).await?;
        TodoItem::try_from(updated)
    }

    async fn list(&self) -> EdutaskResult<Vec<TodoItem>> {
        self.controller()
            .get_all()
            .await?
            .into_iter()
            .map(TodoItem::try_from)
            .collect()
    }
}

impl std::fmt::Debug for TodoController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoController").finish_non_exhaustive()
    }
}
