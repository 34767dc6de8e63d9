//! Helpers for working with open-schema BSON documents.

use crate::{DocumentId, EdutaskError, EdutaskResult};
use bson::{Bson, Document};

/// Name of the store-assigned identifier field.
pub const ID_FIELD: &str = "_id";

/// Returns the document's identifier, if it carries an `ObjectId` one.
#[must_use]
pub fn document_id(document: &Document) -> Option<DocumentId> {
    document.get_object_id(ID_FIELD).ok().map(DocumentId::from)
}

/// Builds the filter `{"_id": <id>}`.
#[must_use]
pub fn id_filter(id: &DocumentId) -> Document {
    let mut filter = Document::new();
    filter.insert(ID_FIELD, Bson::from(*id));
    filter
}

/// Parses a JSON object (extended JSON accepted) into a document.
pub fn from_json(value: serde_json::Value) -> EdutaskResult<Document> {
    if !value.is_object() {
        return Err(EdutaskError::invalid_argument("expected a JSON object"));
    }

    match Bson::try_from(value) {
        Ok(Bson::Document(document)) => Ok(document),
        Ok(other) => Err(EdutaskError::Serialization(format!(
            "expected a document, got {:?}",
            other.element_type()
        ))),
        Err(e) => Err(EdutaskError::Serialization(e.to_string())),
    }
}
