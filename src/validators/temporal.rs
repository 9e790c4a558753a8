//! Date, time and timezone validation.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde_json::Value;

use super::check_null;
use crate::error::ValidationError;

/// Canonical calendar date format.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical time-of-day format.
const TIME_FORMAT: &str = "%H:%M:%S";

/// IANA-style timezone names: a bare area (`UTC`), an offset form
/// (`UTC+8`), or slash-separated location segments (`Asia/Shanghai`,
/// `America/Argentina/Buenos_Aires`, `Etc/GMT-14`).
static TIMEZONE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]+(?:[+-]\d{1,2})?(?:/[A-Za-z0-9_+\-]+)*$")
        .expect("timezone name pattern compiles")
});

pub(crate) fn validate_date(
    required: bool,
    value: &Value,
    field: &str,
) -> Result<(), ValidationError> {
    if let Some(result) = check_null(required, value, field) {
        return result;
    }

    let text = match value.as_str() {
        Some(text) => text,
        None => {
            tracing::warn!(field, "date field value is not a string");
            return Err(ValidationError::NotAString(field.to_string()));
        }
    };

    if NaiveDate::parse_from_str(text, DATE_FORMAT).is_err() {
        tracing::warn!(field, value = text, "date field value does not parse");
        return Err(ValidationError::InvalidValue(field.to_string()));
    }
    Ok(())
}

pub(crate) fn validate_time(
    required: bool,
    value: &Value,
    field: &str,
) -> Result<(), ValidationError> {
    if let Some(result) = check_null(required, value, field) {
        return result;
    }

    let text = match value.as_str() {
        Some(text) => text,
        None => {
            tracing::warn!(field, "time field value is not a string");
            return Err(ValidationError::NotAString(field.to_string()));
        }
    };

    if NaiveTime::parse_from_str(text, TIME_FORMAT).is_err() {
        tracing::warn!(field, value = text, "time field value does not parse");
        return Err(ValidationError::InvalidValue(field.to_string()));
    }
    Ok(())
}

pub(crate) fn validate_timezone(
    required: bool,
    value: &Value,
    field: &str,
) -> Result<(), ValidationError> {
    if let Some(result) = check_null(required, value, field) {
        return result;
    }

    match value.as_str() {
        Some(text) if TIMEZONE_NAME.is_match(text) => Ok(()),
        _ => {
            tracing::warn!(field, "timezone field value is not a recognized name");
            Err(ValidationError::InvalidTimezone(field.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_date_accepts_canonical_form() {
        assert!(validate_date(false, &json!("2024-02-29"), "birth").is_ok());
    }

    #[test]
    fn test_date_rejects_impossible_calendar_dates() {
        assert_eq!(
            validate_date(false, &json!("2020-13-40"), "birth"),
            Err(ValidationError::InvalidValue("birth".into()))
        );
        // Not a leap year.
        assert_eq!(
            validate_date(false, &json!("2023-02-29"), "birth"),
            Err(ValidationError::InvalidValue("birth".into()))
        );
    }

    #[test]
    fn test_date_rejects_other_layouts() {
        assert_eq!(
            validate_date(false, &json!("01/02/2020"), "birth"),
            Err(ValidationError::InvalidValue("birth".into()))
        );
    }

    #[test]
    fn test_date_rejects_non_string() {
        assert_eq!(
            validate_date(false, &json!(20200101), "birth"),
            Err(ValidationError::NotAString("birth".into()))
        );
    }

    #[test]
    fn test_time_accepts_canonical_form() {
        assert!(validate_time(false, &json!("23:59:59"), "at").is_ok());
        assert!(validate_time(false, &json!("00:00:00"), "at").is_ok());
    }

    #[test]
    fn test_time_rejects_out_of_range_and_partial() {
        assert_eq!(
            validate_time(false, &json!("24:00:00"), "at"),
            Err(ValidationError::InvalidValue("at".into()))
        );
        assert_eq!(
            validate_time(false, &json!("12:30"), "at"),
            Err(ValidationError::InvalidValue("at".into()))
        );
    }

    #[test]
    fn test_timezone_accepts_common_names() {
        for tz in ["UTC", "Asia/Shanghai", "America/Argentina/Buenos_Aires", "Etc/GMT+8"] {
            assert!(validate_timezone(false, &json!(tz), "tz").is_ok(), "{tz}");
        }
    }

    #[test]
    fn test_timezone_rejects_malformed_names() {
        for tz in ["", "8", "Asia/", "/Shanghai", "not a zone"] {
            assert_eq!(
                validate_timezone(false, &json!(tz), "tz"),
                Err(ValidationError::InvalidTimezone("tz".into())),
                "{tz}"
            );
        }
    }

    #[test]
    fn test_timezone_rejects_non_string() {
        assert_eq!(
            validate_timezone(false, &json!(8), "tz"),
            Err(ValidationError::InvalidTimezone("tz".into()))
        );
    }

    #[test]
    fn test_null_follows_required_rule() {
        assert!(validate_date(false, &Value::Null, "birth").is_ok());
        assert!(validate_time(false, &Value::Null, "at").is_ok());
        assert!(validate_timezone(false, &Value::Null, "tz").is_ok());
        assert_eq!(
            validate_timezone(true, &Value::Null, "tz"),
            Err(ValidationError::RequiredFieldMissing("tz".into()))
        );
    }
}
