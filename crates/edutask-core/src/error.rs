//! Unified error types for all layers of the application.

use std::fmt::Debug;
use thiserror::Error;

/// Server error code for a document that failed `$jsonSchema` validation.
pub const DOCUMENT_VALIDATION_FAILURE: i32 = 121;

/// Server error code for a unique index violation.
pub const DUPLICATE_KEY: i32 = 11000;

/// Unified error type for all layers of Edutask.
///
/// The variants follow three broad classes: precondition failures raised
/// locally (`InvalidArgument`), rejections reported by the store for a
/// write (`WriteRejected`), and everything else the store or runtime can
/// fail with. Store errors are carried through without being retried.
#[derive(Error, Debug)]
pub enum EdutaskError {
    // ============ Caller Errors ============
    /// Argument rejected before the store was contacted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    // ============ Store Errors ============
    /// Write rejected by a store-side constraint (schema, type, unique index)
    #[error("Write rejected ({code}): {message}")]
    WriteRejected {
        code: i32,
        code_name: Option<String>,
        message: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    // ============ Infrastructure Errors ============
    /// Document (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EdutaskError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::WriteRejected { .. } => "WRITE_REJECTED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a database error.
    #[must_use]
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if the store rejected a write.
    #[must_use]
    pub const fn is_write_rejected(&self) -> bool {
        matches!(self, Self::WriteRejected { .. })
    }

    /// Returns true if the store rejected a write because of a unique index.
    #[must_use]
    pub const fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::WriteRejected { code: DUPLICATE_KEY, .. })
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for EdutaskError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error)) => Self::WriteRejected {
                code: write_error.code,
                code_name: write_error.code_name.clone(),
                message: write_error.message.clone(),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for EdutaskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("JSON error: {}", err))
    }
}

impl From<bson::de::Error> for EdutaskError {
    fn from(err: bson::de::Error) -> Self {
        Self::Serialization(format!("BSON decode error: {}", err))
    }
}

impl From<bson::ser::Error> for EdutaskError {
    fn from(err: bson::ser::Error) -> Self {
        Self::Serialization(format!("BSON encode error: {}", err))
    }
}
