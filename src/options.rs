//! Option decoders.
//!
//! Attribute constraint payloads arrive loosely typed: a metadata service
//! may store them as structured JSON or as a string containing embedded
//! JSON. The decoders here normalize both shapes into structured
//! descriptors. They are pure and never fail: a payload that cannot be
//! decoded yields the neutral descriptor (unbounded range, empty
//! enumeration), leaving the rejection decision to the validators.

use serde_json::Value;

/// Decoded numeric-range constraint for an integer field.
///
/// Both bounds are kept as strings; an empty string means "unbounded" on
/// that side. Parsing the strings into `i64` happens at validation time,
/// where an unparsable bound falls back to the widest representable value
/// on that side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntOption {
    /// Stringified lower bound; empty when unbounded.
    pub min: String,
    /// Stringified upper bound; empty when unbounded.
    pub max: String,
}

/// One decoded entry of an enumeration constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumOption {
    /// Identifier a candidate value must equal to be accepted.
    pub id: String,
    /// Display label; not consulted by validation.
    pub name: String,
    /// Whether this entry is the create-time default for the field.
    pub is_default: bool,
}

/// Decodes an integer field's constraint payload into an [`IntOption`].
///
/// Accepts either a structured object with `min`/`max` members (each a
/// string or a number) or a string containing that object as embedded JSON.
/// Any other shape, or malformed embedded JSON, decodes to the unbounded
/// descriptor.
///
/// # Example
///
/// ```rust
/// use fieldguard::options::parse_int_option;
/// use serde_json::json;
///
/// let opt = parse_int_option(&json!({"min": "10", "max": 20}));
/// assert_eq!(opt.min, "10");
/// assert_eq!(opt.max, "20");
///
/// let opt = parse_int_option(&json!(r#"{"min": "1", "max": "5"}"#));
/// assert_eq!(opt.min, "1");
///
/// let opt = parse_int_option(&json!(true));
/// assert!(opt.min.is_empty() && opt.max.is_empty());
/// ```
pub fn parse_int_option(option: &Value) -> IntOption {
    let obj = match option {
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => return parse_int_option(&parsed),
            Err(_) => return IntOption::default(),
        },
        Value::Object(map) => map,
        _ => return IntOption::default(),
    };

    IntOption {
        min: obj.get("min").map(bound_string).unwrap_or_default(),
        max: obj.get("max").map(bound_string).unwrap_or_default(),
    }
}

/// Decodes an enumeration field's constraint payload into its ordered entry
/// list.
///
/// Accepts a structured array of `{id, name, is_default}` objects or a
/// string containing that array as embedded JSON. Entries without a string
/// `id` are skipped; declaration order is preserved.
///
/// # Example
///
/// ```rust
/// use fieldguard::options::parse_enum_option;
/// use serde_json::json;
///
/// let entries = parse_enum_option(&json!([
///     {"id": "a", "name": "Alpha", "is_default": true},
///     {"id": "b", "name": "Beta"}
/// ]));
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].id, "a");
/// assert!(entries[0].is_default);
/// assert!(!entries[1].is_default);
/// ```
pub fn parse_enum_option(option: &Value) -> Vec<EnumOption> {
    let items = match option {
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => return parse_enum_option(&parsed),
            Err(_) => return Vec::new(),
        },
        Value::Array(items) => items,
        _ => return Vec::new(),
    };

    items
        .iter()
        .filter_map(|item| {
            let entry = item.as_object()?;
            let id = entry.get("id")?.as_str()?;
            Some(EnumOption {
                id: id.to_string(),
                name: entry
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                is_default: entry
                    .get("is_default")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            })
        })
        .collect()
}

/// Renders a bound member as its string form: strings pass through,
/// numbers are stringified, everything else is "unbounded".
fn bound_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_int_option_structured() {
        let opt = parse_int_option(&json!({"min": "1", "max": "100"}));
        assert_eq!(opt.min, "1");
        assert_eq!(opt.max, "100");
    }

    #[test]
    fn test_int_option_numeric_bounds_stringified() {
        let opt = parse_int_option(&json!({"min": 1, "max": 100}));
        assert_eq!(opt.min, "1");
        assert_eq!(opt.max, "100");
    }

    #[test]
    fn test_int_option_embedded_json() {
        let opt = parse_int_option(&json!(r#"{"min": "-5", "max": "5"}"#));
        assert_eq!(opt.min, "-5");
        assert_eq!(opt.max, "5");
    }

    #[test]
    fn test_int_option_missing_members() {
        let opt = parse_int_option(&json!({"max": "9"}));
        assert_eq!(opt.min, "");
        assert_eq!(opt.max, "9");
    }

    #[test]
    fn test_int_option_unusable_payloads() {
        assert_eq!(parse_int_option(&json!(null)), IntOption::default());
        assert_eq!(parse_int_option(&json!(42)), IntOption::default());
        assert_eq!(parse_int_option(&json!("not json")), IntOption::default());
        assert_eq!(parse_int_option(&json!([1, 2])), IntOption::default());
    }

    #[test]
    fn test_enum_option_structured() {
        let entries = parse_enum_option(&json!([
            {"id": "dev", "name": "Development"},
            {"id": "prod", "name": "Production", "is_default": true}
        ]));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "dev");
        assert_eq!(entries[1].name, "Production");
        assert!(entries[1].is_default);
    }

    #[test]
    fn test_enum_option_embedded_json() {
        let entries = parse_enum_option(&json!(r#"[{"id": "a"}, {"id": "b"}]"#));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "a");
        assert_eq!(entries[1].id, "b");
    }

    #[test]
    fn test_enum_option_preserves_order() {
        let entries = parse_enum_option(&json!([
            {"id": "z"}, {"id": "a"}, {"id": "m"}
        ]));
        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_enum_option_skips_entries_without_id() {
        let entries = parse_enum_option(&json!([
            {"id": "ok"},
            {"name": "no id"},
            {"id": 7},
            "not an object"
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "ok");
    }

    #[test]
    fn test_enum_option_unusable_payloads() {
        assert!(parse_enum_option(&json!(null)).is_empty());
        assert!(parse_enum_option(&json!({"id": "a"})).is_empty());
        assert!(parse_enum_option(&json!("not json")).is_empty());
    }
}
