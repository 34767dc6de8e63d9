//! Collection schemas and their out-of-band application to the store.
//!
//! A schema file describes one collection: the `$jsonSchema` validator the
//! store checks every write against, and the fields that carry a unique
//! index. Applying it is a precondition for correct DAO behaviour and is
//! done by whoever owns the deployment (server startup, test fixtures).

use bson::{doc, Document};
use edutask_config::SchemaConfig;
use edutask_core::{from_json, EdutaskError, EdutaskResult};
use mongodb::{
    error::ErrorKind,
    options::IndexOptions,
    Database, IndexModel,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Server error code returned when creating a collection that exists.
const NAMESPACE_EXISTS: i32 = 48;

fn is_namespace_exists(error: &mongodb::error::Error) -> bool {
    matches!(error.kind.as_ref(), ErrorKind::Command(c) if c.code == NAMESPACE_EXISTS)
}

/// Validator and index declaration for one collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSchema {
    /// Collection name.
    pub collection: String,
    /// Body of the `$jsonSchema` validator.
    pub json_schema: serde_json::Value,
    /// Fields that get an ascending unique index.
    #[serde(default)]
    pub unique: Vec<String>,
}

impl CollectionSchema {
    /// Parses a schema from its JSON text.
    pub fn from_json_str(raw: &str) -> EdutaskResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses a schema file.
    pub fn from_file(path: &Path) -> EdutaskResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EdutaskError::Configuration(format!(
                "Failed to read schema {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&raw)
    }

    /// Loads the schema for `collection` from the configured directory.
    pub fn load(config: &SchemaConfig, collection: &str) -> EdutaskResult<Self> {
        let path = config.schema_path(collection);
        debug!("Loading schema for '{}' from {}", collection, path.display());

        let schema = Self::from_file(&path)?;
        if schema.collection != collection {
            return Err(EdutaskError::Configuration(format!(
                "Schema {} declares collection '{}', expected '{}'",
                path.display(),
                schema.collection,
                collection
            )));
        }
        Ok(schema)
    }

    /// Loads every configured schema.
    pub fn load_all(config: &SchemaConfig) -> EdutaskResult<Vec<Self>> {
        config
            .collections
            .iter()
            .map(|collection| Self::load(config, collection))
            .collect()
    }

    /// Returns the validator document, `{"$jsonSchema": ...}`.
    pub fn validator(&self) -> EdutaskResult<Document> {
        let body = from_json(self.json_schema.clone())?;
        Ok(doc! { "$jsonSchema": body })
    }

    /// Returns the unique index models declared by this schema.
    #[must_use]
    pub fn unique_indexes(&self) -> Vec<IndexModel> {
        self.unique
            .iter()
            .map(|field| {
                let mut keys = Document::new();
                keys.insert(field.clone(), 1);
                IndexModel::builder()
                    .keys(keys)
                    .options(IndexOptions::builder().unique(true).build())
                    .build()
            })
            .collect()
    }
}

/// Applies collection schemas to a database.
pub struct SchemaBootstrap;

impl SchemaBootstrap {
    /// Creates the collection with its validator if it does not exist yet,
    /// then declares the unique indexes.
    ///
    /// An existing collection keeps whatever validator it already has.
    /// Index creation is idempotent.
    pub async fn apply(database: &Database, schema: &CollectionSchema) -> EdutaskResult<()> {
        let existing = database.list_collection_names().await?;

        if existing.iter().any(|name| name == &schema.collection) {
            debug!("Collection '{}' exists, keeping its validator", schema.collection);
        } else {
            let created = database
                .create_collection(&schema.collection)
                .validator(schema.validator()?)
                .await;

            match created {
                Ok(()) => info!("Created collection '{}' with validator", schema.collection),
                Err(e) if is_namespace_exists(&e) => {
                    debug!("Collection '{}' was created concurrently", schema.collection);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let indexes = schema.unique_indexes();
        if !indexes.is_empty() {
            let collection = database.collection::<Document>(&schema.collection);
            collection.create_indexes(indexes).await?;
            info!(
                "Unique indexes on '{}': {}",
                schema.collection,
                schema.unique.join(", ")
            );
        }

        Ok(())
    }

    /// Applies every schema in order, stopping at the first failure.
    pub async fn apply_all(database: &Database, schemas: &[CollectionSchema]) -> EdutaskResult<()> {
        for schema in schemas {
            Self::apply(database, schema).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TODO_SCHEMA: &str = include_str!("../../../schemas/todo.json");
    const USER_SCHEMA: &str = include_str!("../../../schemas/user.json");

    #[test]
    fn test_shipped_todo_schema() {
        let schema = CollectionSchema::from_json_str(TODO_SCHEMA).unwrap();
        assert_eq!(schema.collection, "todo");
        assert_eq!(schema.unique, vec!["description"]);

        let validator = schema.validator().unwrap();
        let body = validator.get_document("$jsonSchema").unwrap();
        let required = body.get_array("required").unwrap();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0].as_str(), Some("description"));
        assert_eq!(
            body.get_document("properties")
                .unwrap()
                .get_document("done")
                .unwrap()
                .get_str("bsonType")
                .unwrap(),
            "bool"
        );
    }

    #[test]
    fn test_shipped_user_schema_has_no_unique_index() {
        let schema = CollectionSchema::from_json_str(USER_SCHEMA).unwrap();
        assert_eq!(schema.collection, "user");
        assert!(schema.unique.is_empty());
        assert!(schema.unique_indexes().is_empty());
    }

    #[test]
    fn test_unique_indexes() {
        let schema = CollectionSchema {
            collection: "todo".to_string(),
            json_schema: json!({ "bsonType": "object" }),
            unique: vec!["description".to_string()],
        };

        let indexes = schema.unique_indexes();
        assert_eq!(indexes.len(), 1);
        assert_eq!(indexes[0].keys, doc! { "description": 1 });
        assert_eq!(
            indexes[0].options.as_ref().and_then(|o| o.unique),
            Some(true)
        );
    }

    #[test]
    fn test_unique_defaults_to_empty() {
        let schema = CollectionSchema::from_json_str(
            r#"{ "collection": "notes", "json_schema": { "bsonType": "object" } }"#,
        )
        .unwrap();
        assert!(schema.unique.is_empty());
    }

    #[test]
    fn test_load_rejects_mismatched_collection() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("todo.json"), USER_SCHEMA).unwrap();

        let config = SchemaConfig {
            directory: dir.path().to_string_lossy().into_owned(),
            collections: vec!["todo".to_string()],
        };
        let err = CollectionSchema::load(&config, "todo").unwrap_err();
        assert!(matches!(err, EdutaskError::Configuration(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let config = SchemaConfig {
            directory: "/nonexistent/edutask".to_string(),
            collections: vec!["todo".to_string()],
        };
        let err = CollectionSchema::load_all(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to read schema"));
    }
}
