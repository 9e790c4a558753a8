//! Validation error types.
//!
//! This module provides [`ValidationError`], the single error returned by a
//! failed validation, and [`SchemaFetchError`] for schema-loading failures.
//!
//! Validation is fail-fast: the first violation aborts the run and is
//! returned verbatim. Every field-level variant carries the offending field
//! identifier so callers can render a field-scoped message.

use thiserror::Error;

/// Failure to load the attribute schema for an (owner, object) pair.
///
/// This is the only error kind not attributable to a specific field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaFetchError {
    /// The fetch itself failed (connection refused, timeout, decode error).
    #[error("schema fetch failed: {0}")]
    Transport(String),

    /// The fetch succeeded but the metadata service reported an error code.
    #[error("schema service returned error code {0}")]
    Remote(i64),
}

/// A single validation failure.
///
/// Returned by [`ValidationSession::validate`](crate::ValidationSession::validate)
/// as soon as the first violation is detected. No aggregation: when multiple
/// fields are invalid, the one reported is the first in the candidate
/// mapping's insertion order.
///
/// # Example
///
/// ```rust
/// use fieldguard::ValidationError;
///
/// let err = ValidationError::RequiredFieldMissing("name".to_string());
/// assert_eq!(err.field(), Some("name"));
/// assert_eq!(err.to_string(), "field `name` is required but missing or empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Schema loading failed before any field was examined.
    #[error(transparent)]
    Schema(#[from] SchemaFetchError),

    /// The candidate mapping contains a field the object schema does not
    /// declare (and the session was not told to ignore).
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// A required field is null, absent, or (for text types) empty.
    #[error("field `{0}` is required but missing or empty")]
    RequiredFieldMissing(String),

    /// A text value exceeds the declared length limit.
    #[error("field `{field}` exceeds the maximum length of {limit}")]
    OverLength {
        /// The offending field identifier.
        field: String,
        /// The character limit for the field's declared type.
        limit: usize,
    },

    /// The value is not a string but the declared type requires one.
    #[error("field `{0}` must be a string")]
    NotAString(String),

    /// A text value does not match the field's declared pattern, or the
    /// declared pattern itself does not compile.
    #[error("field `{0}` does not match its declared pattern")]
    RegexMismatch(String),

    /// The value is not an integer or float number.
    #[error("field `{0}` must be an integer")]
    NotAnInteger(String),

    /// An integer value lies outside the declared `[min, max]` bounds.
    #[error("field `{0}` is out of the declared range")]
    OutOfRange(String),

    /// The value is not acceptable for the declared type (bad enumeration
    /// member, unparsable date or time).
    #[error("field `{0}` has an invalid value")]
    InvalidValue(String),

    /// The value does not name a recognized timezone.
    #[error("field `{0}` must name a recognized timezone")]
    InvalidTimezone(String),

    /// The value is not a boolean.
    #[error("field `{0}` must be a boolean")]
    NotABoolean(String),
}

impl ValidationError {
    /// Returns the offending field identifier, if the error is attributable
    /// to one. Schema fetch failures return `None`.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Schema(_) => None,
            ValidationError::UnknownField(f)
            | ValidationError::RequiredFieldMissing(f)
            | ValidationError::NotAString(f)
            | ValidationError::RegexMismatch(f)
            | ValidationError::NotAnInteger(f)
            | ValidationError::OutOfRange(f)
            | ValidationError::InvalidValue(f)
            | ValidationError::InvalidTimezone(f)
            | ValidationError::NotABoolean(f) => Some(f),
            ValidationError::OverLength { field, .. } => Some(field),
        }
    }
}

// Errors cross thread boundaries in embedding services; keep these
// assertions so a future field change cannot silently lose Send + Sync.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessor() {
        assert_eq!(
            ValidationError::UnknownField("ghost".into()).field(),
            Some("ghost")
        );
        assert_eq!(
            ValidationError::OverLength {
                field: "name".into(),
                limit: 256
            }
            .field(),
            Some("name")
        );
        assert_eq!(
            ValidationError::Schema(SchemaFetchError::Remote(1199006)).field(),
            None
        );
    }

    #[test]
    fn test_display_carries_field() {
        let err = ValidationError::NotAnInteger("port".into());
        assert!(err.to_string().contains("port"));

        let err = ValidationError::OverLength {
            field: "desc".into(),
            limit: 2000,
        };
        assert!(err.to_string().contains("2000"));
    }

    #[test]
    fn test_fetch_error_converts() {
        let err: ValidationError = SchemaFetchError::Transport("connection refused".into()).into();
        assert!(matches!(err, ValidationError::Schema(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_errors_clone_and_compare() {
        let err = ValidationError::OutOfRange("port".into());
        assert_eq!(err.clone(), err);

        let fetch = SchemaFetchError::Transport("timed out".into());
        assert_eq!(fetch.clone(), fetch);
        assert_ne!(
            ValidationError::from(fetch),
            ValidationError::Schema(SchemaFetchError::Remote(1))
        );
    }
}
