//! Short and long text validation.
//!
//! Both families share one rule set and differ only in their length limit.
//! An empty string is treated exactly like a null value: it fails a required
//! field and short-circuits an optional one before any constraint check, so
//! a declared pattern is never run against the empty string.

use regex::Regex;
use serde_json::Value;

use super::check_null;
use crate::error::ValidationError;
use crate::schema::{Attribute, LONG_TEXT_LIMIT, SHORT_TEXT_LIMIT};

pub(crate) fn validate_short_text(
    attr: &Attribute,
    required: bool,
    value: &Value,
    field: &str,
) -> Result<(), ValidationError> {
    validate_text(attr, required, value, field, SHORT_TEXT_LIMIT)
}

pub(crate) fn validate_long_text(
    attr: &Attribute,
    required: bool,
    value: &Value,
    field: &str,
) -> Result<(), ValidationError> {
    validate_text(attr, required, value, field, LONG_TEXT_LIMIT)
}

fn validate_text(
    attr: &Attribute,
    required: bool,
    value: &Value,
    field: &str,
    limit: usize,
) -> Result<(), ValidationError> {
    if let Some(result) = check_null(required, value, field) {
        return result;
    }

    let text = match value.as_str() {
        Some(text) => text,
        None => {
            tracing::warn!(field, "text field value is not a string");
            return Err(ValidationError::NotAString(field.to_string()));
        }
    };

    if text.chars().count() > limit {
        tracing::warn!(field, limit, "text field value over length limit");
        return Err(ValidationError::OverLength {
            field: field.to_string(),
            limit,
        });
    }

    if text.is_empty() {
        if required {
            tracing::warn!(field, "required text field is empty");
            return Err(ValidationError::RequiredFieldMissing(field.to_string()));
        }
        return Ok(());
    }

    // A string option payload is a regex the value must match in full.
    // A pattern that does not compile rejects the value rather than
    // crashing the validation run.
    if let Value::String(pattern) = &attr.option {
        if !pattern.is_empty() && !matches_fully(pattern, text) {
            tracing::warn!(field, pattern = pattern.as_str(), "text field value does not match pattern");
            return Err(ValidationError::RegexMismatch(field.to_string()));
        }
    }

    Ok(())
}

/// Whether `text` matches `pattern` in full. An invalid pattern counts as a
/// mismatch.
fn matches_fully(pattern: &str, text: &str) -> bool {
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(re) => re.is_match(text),
        Err(_) => false,
    }
}
