//! User entity.

use crate::DocumentId;
use serde::{Deserialize, Serialize};

/// A registered user as stored in the `user` collection.
///
/// Only `email` is mandatory; the remaining fields default when absent and
/// unknown fields are ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Email address, matched exactly on lookup.
    pub email: String,
    /// Ids of the todo items owned by the user.
    #[serde(default)]
    pub tasks: Vec<DocumentId>,
}

impl User {
    /// Creates a new, not yet persisted, user.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            tasks: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};

    #[test]
    fn test_decode_stored_user() {
        let oid = ObjectId::new();
        let task = ObjectId::new();
        let user: User = bson::from_document(doc! {
            "_id": oid,
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane.doe@example.com",
            "tasks": [task],
        })
        .unwrap();

        assert_eq!(user.id, Some(DocumentId::from(oid)));
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Doe");
        assert_eq!(user.email, "jane.doe@example.com");
        assert_eq!(user.tasks, vec![DocumentId::from(task)]);
    }

    #[test]
    fn test_decode_minimal_user() {
        let user: User =
            bson::from_document(doc! { "email": "min@example.com", "role": "admin" }).unwrap();
        assert_eq!(user.id, None);
        assert!(user.first_name.is_empty());
        assert!(user.tasks.is_empty());
    }

    #[test]
    fn test_decode_requires_email() {
        assert!(bson::from_document::<User>(doc! { "firstName": "Nobody" }).is_err());
    }

    #[test]
    fn test_encode_uses_camel_case_and_skips_missing_id() {
        let document = bson::to_document(&User::new("Jane", "Doe", "jane@example.com")).unwrap();
        assert!(document.contains_key("firstName"));
        assert!(document.contains_key("lastName"));
        assert!(!document.contains_key("_id"));
    }
}
