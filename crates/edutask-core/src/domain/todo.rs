//! Todo item entity.

use crate::{document_id, DocumentId, EdutaskError, EdutaskResult, ID_FIELD};
use bson::{Bson, Document};

/// Field holding the item's description.
pub const DESCRIPTION_FIELD: &str = "description";

/// Field holding the item's completion flag.
pub const DONE_FIELD: &str = "done";

/// A todo item.
///
/// The stored schema is open: any field besides `_id`, `description` and
/// `done` is kept in [`TodoItem::extra`] and written back verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    /// Store-assigned identifier; `None` until the item has been created.
    pub id: Option<DocumentId>,
    /// Description, unique across all items.
    pub description: String,
    /// Completion flag.
    pub done: bool,
    /// Application-defined fields outside the fixed schema.
    pub extra: Document,
}

impl TodoItem {
    /// Creates a new, not yet persisted, open item.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
            done: false,
            extra: Document::new(),
        }
    }

    /// Adds an application-defined field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Converts the item into the document that gets stored.
    #[must_use]
    pub fn into_document(self) -> Document {
        let mut document = Document::new();
        if let Some(id) = self.id {
            document.insert(ID_FIELD, Bson::from(id));
        }
        document.insert(DESCRIPTION_FIELD, self.description);
        document.insert(DONE_FIELD, self.done);
        for (key, value) in self.extra {
            document.insert(key, value);
        }
        document
    }
}

impl TryFrom<Document> for TodoItem {
    type Error = EdutaskError;

    fn try_from(mut document: Document) -> EdutaskResult<Self> {
        let id = document_id(&document);
        document.remove(ID_FIELD);

        let description = match document.remove(DESCRIPTION_FIELD) {
            Some(Bson::String(description)) => description,
            Some(other) => {
                return Err(EdutaskError::Serialization(format!(
                    "todo description must be a string, got {:?}",
                    other.element_type()
                )))
            }
            None => {
                return Err(EdutaskError::Serialization(
                    "todo document has no description".to_string(),
                ))
            }
        };

        let done = match document.remove(DONE_FIELD) {
            Some(Bson::Boolean(done)) => done,
            None => false,
            Some(other) => {
                return Err(EdutaskError::Serialization(format!(
                    "todo done flag must be a boolean, got {:?}",
                    other.element_type()
                )))
            }
        };

        Ok(Self {
            id,
            description,
            done,
            extra: document,
        })
    }
}
