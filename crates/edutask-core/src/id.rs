//! Typed ID wrapper for stored documents.

use crate::{EdutaskError, EdutaskResult};
use bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A strongly-typed wrapper for store-assigned document identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub ObjectId);

impl DocumentId {
    /// Creates a new document ID.
    #[must_use]
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Creates a document ID from an `ObjectId`.
    #[must_use]
    pub const fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    /// Parses a document ID from its 24-character hex form.
    pub fn parse(s: &str) -> EdutaskResult<Self> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| EdutaskError::invalid_argument(format!("invalid document id: '{}'", s)))
    }

    /// Returns the inner `ObjectId`.
    #[must_use]
    pub const fn into_inner(self) -> ObjectId {
        self.0
    }

    /// Returns the hex representation.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = EdutaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<DocumentId> for ObjectId {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

impl From<DocumentId> for Bson {
    fn from(id: DocumentId) -> Self {
        Bson::ObjectId(id.0)
    }
}

impl TryFrom<&Bson> for DocumentId {
    type Error = EdutaskError;

    fn try_from(value: &Bson) -> Result<Self, Self::Error> {
        match value {
            Bson::ObjectId(oid) => Ok(Self(*oid)),
            other => Err(EdutaskError::internal(format!(
                "expected an ObjectId, got {:?}",
                other.element_type()
            ))),
        }
    }
}
