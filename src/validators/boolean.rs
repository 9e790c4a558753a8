//! Boolean validation.

use serde_json::Value;

use super::check_null;
use crate::error::ValidationError;

/// Validates a boolean field. Only a JSON boolean is accepted; truthy
/// strings or numbers are not coerced.
pub(crate) fn validate_bool(
    required: bool,
    value: &Value,
    field: &str,
) -> Result<(), ValidationError> {
    if let Some(result) = check_null(required, value, field) {
        return result;
    }

    if value.is_boolean() {
        Ok(())
    } else {
        tracing::warn!(field, "boolean field value is not a boolean");
        Err(ValidationError::NotABoolean(field.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_booleans() {
        assert!(validate_bool(false, &json!(true), "enabled").is_ok());
        assert!(validate_bool(false, &json!(false), "enabled").is_ok());
    }

    #[test]
    fn test_rejects_coercible_values() {
        for value in [json!("true"), json!(1), json!(0.0)] {
            assert_eq!(
                validate_bool(false, &value, "enabled"),
                Err(ValidationError::NotABoolean("enabled".into()))
            );
        }
    }

    #[test]
    fn test_null_follows_required_rule() {
        assert_eq!(
            validate_bool(true, &Value::Null, "enabled"),
            Err(ValidationError::RequiredFieldMissing("enabled".into()))
        );
        assert!(validate_bool(false, &Value::Null, "enabled").is_ok());
    }
}
