//! Validation utilities.

use crate::{EdutaskError, EdutaskResult};
use validator::ValidationError;

/// Converts a rule failure on `field` into an `EdutaskError`.
#[must_use]
pub fn validation_error_to_edutask_error(field: &str, error: &ValidationError) -> EdutaskError {
    let message = error
        .message
        .as_ref()
        .map_or_else(|| error.code.to_string(), ToString::to_string);

    EdutaskError::InvalidArgument(format!("{}: {}", field, message))
}

/// Checks that `email` is usable as a lookup key.
///
/// This is a syntactic minimum (non-empty, contains `@`), not an
/// address-format check.
pub fn validate_email_lookup(email: &str) -> EdutaskResult<()> {
    rules::not_empty(email)
        .and_then(|()| rules::contains_at_sign(email))
        .map_err(|e| validation_error_to_edutask_error("email", &e))
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not empty.
    pub fn not_empty(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::new("not_empty").with_message("must not be empty".into()));
        }
        Ok(())
    }

    /// Validates that a string contains the `@` separator.
    pub fn contains_at_sign(value: &str) -> Result<(), ValidationError> {
        if !value.contains('@') {
            return Err(ValidationError::new("missing_at_sign")
                .with_message(format!("invalid email address '{}'", value).into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_lookup_email() {
        assert!(validate_email_lookup("valid@example.com").is_ok());
    }

    #[test]
    fn test_only_the_separator_is_required() {
        assert!(validate_email_lookup("@").is_ok());
        assert!(validate_email_lookup("user@").is_ok());
    }

    #[test]
    fn test_empty_email_rejected() {
        let err = validate_email_lookup("").unwrap_err();
        assert!(matches!(err, EdutaskError::InvalidArgument(_)));
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_email_without_separator_rejected() {
        let err = validate_email_lookup("invalid-email.com").unwrap_err();
        assert!(matches!(err, EdutaskError::InvalidArgument(_)));
        assert!(err.to_string().contains("invalid-email.com"));
    }

    #[test]
    fn test_rules() {
        assert!(rules::not_empty("x").is_ok());
        assert_eq!(rules::not_empty("").unwrap_err().code, "not_empty");
        assert_eq!(
            rules::contains_at_sign("nobody").unwrap_err().code,
            "missing_at_sign"
        );
    }
}
