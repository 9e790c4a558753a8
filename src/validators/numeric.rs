//! Integer validation.

use serde_json::Value;

use super::check_null;
use crate::error::ValidationError;
use crate::options::parse_int_option;
use crate::schema::Attribute;

/// Validates an integer field.
///
/// Integer and float numbers are both accepted; floats truncate toward
/// zero before the range check, matching how loosely-typed transports
/// deliver integral values as floats.
///
/// The decoded bounds apply only when both sides are declared. A bound
/// string that fails to parse as an `i64` degrades to the widest
/// representable value on that side, so a malformed schema constraint
/// never rejects writes on that side.
pub(crate) fn validate_int(
    attr: &Attribute,
    required: bool,
    value: &Value,
    field: &str,
) -> Result<(), ValidationError> {
    if let Some(result) = check_null(required, value, field) {
        return result;
    }

    let number = match value {
        Value::Number(n) => n,
        _ => {
            tracing::warn!(field, "integer field value is not a number");
            return Err(ValidationError::NotAnInteger(field.to_string()));
        }
    };
    let candidate = match number.as_i64() {
        Some(i) => i,
        None => match number.as_f64() {
            Some(f) => f as i64,
            None => {
                tracing::warn!(field, "integer field value is not representable");
                return Err(ValidationError::NotAnInteger(field.to_string()));
            }
        },
    };

    let bounds = parse_int_option(&attr.option);
    if bounds.min.is_empty() || bounds.max.is_empty() {
        return Ok(());
    }

    let max = bounds.max.parse::<i64>().unwrap_or(i64::MAX);
    let min = bounds.min.parse::<i64>().unwrap_or(i64::MIN);
    if candidate > max || candidate < min {
        tracing::warn!(field, candidate, min, max, "integer field value out of range");
        return Err(ValidationError::OutOfRange(field.to_string()));
    }

    Ok(())
}
