//! Enumeration validation.

use serde_json::Value;

use super::check_null;
use crate::error::ValidationError;
use crate::options::parse_enum_option;
use crate::schema::Attribute;

/// Validates an enumeration field: the value must equal the identifier of
/// one decoded entry, case-sensitively. A non-string value is reported as
/// an invalid value rather than a type error, since no string at all can
/// name an enumeration member.
pub(crate) fn validate_enum(
    attr: &Attribute,
    required: bool,
    value: &Value,
    field: &str,
) -> Result<(), ValidationError> {
    if let Some(result) = check_null(required, value, field) {
        return result;
    }

    let candidate = match value.as_str() {
        Some(candidate) => candidate,
        None => {
            tracing::warn!(field, "enum field value is not a string");
            return Err(ValidationError::InvalidValue(field.to_string()));
        }
    };

    let entries = parse_enum_option(&attr.option);
    if entries.iter().any(|entry| entry.id == candidate) {
        return Ok(());
    }

    tracing::warn!(field, candidate, "enum field value not in declared entries");
    Err(ValidationError::InvalidValue(field.to_string()))
}
