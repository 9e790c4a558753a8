//! Per-type validation rules.
//!
//! One module per validator family. Each validator is a stateless function
//! taking the field's attribute definition, its required flag, the raw
//! candidate value, and the field identifier. Validators share one null
//! rule: a null value on a required field fails with
//! [`ValidationError::RequiredFieldMissing`], and on an optional field
//! passes with no further checks. Text validators extend the rule to the
//! empty string.

mod boolean;
mod choice;
mod numeric;
mod temporal;
mod text;

use serde_json::Value;

use crate::error::ValidationError;
use crate::schema::{Attribute, FieldType};

/// Dispatches a candidate value to the validator matching the attribute's
/// declared type.
///
/// Types outside the recognized set ([`FieldType::Other`]) pass
/// unconditionally; the metadata service may declare types this validator
/// predates.
pub(crate) fn dispatch(
    attr: &Attribute,
    required: bool,
    value: &Value,
    field: &str,
) -> Result<(), ValidationError> {
    match attr.field_type {
        FieldType::ShortText => text::validate_short_text(attr, required, value, field),
        FieldType::LongText => text::validate_long_text(attr, required, value, field),
        FieldType::Int => numeric::validate_int(attr, required, value, field),
        FieldType::Enum => choice::validate_enum(attr, required, value, field),
        FieldType::Date => temporal::validate_date(required, value, field),
        FieldType::Time => temporal::validate_time(required, value, field),
        FieldType::TimeZone => temporal::validate_timezone(required, value, field),
        FieldType::Bool => boolean::validate_bool(required, value, field),
        FieldType::Other => Ok(()),
    }
}

/// Applies the uniform null rule shared by every validator.
///
/// Returns `Some(result)` when the value is null and the caller should stop,
/// `None` when validation should continue with a present value.
fn check_null(required: bool, value: &Value, field: &str) -> Option<Result<(), ValidationError>> {
    if !value.is_null() {
        return None;
    }
    if required {
        tracing::warn!(field, "required field is null");
        return Some(Err(ValidationError::RequiredFieldMissing(field.to_string())));
    }
    Some(Ok(()))
}
