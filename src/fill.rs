//! Default filling for create-mode validation.
//!
//! Before a create-mode validation run, fields declared in the schema but
//! absent from the candidate mapping can be populated with schema-declared
//! defaults, so required-ness is checked against the filled mapping. The
//! seam is the [`DefaultFiller`] trait; [`StandardDefaultFiller`] is the
//! shipped policy.

use indexmap::IndexMap;
use serde_json::Value;

use crate::options::parse_enum_option;
use crate::schema::{Attribute, FieldType};
use crate::FieldValues;

/// Fills schema-declared defaults into a candidate value mapping.
///
/// Invoked by the session for create-mode validation only, after the schema
/// is loaded and before any field is checked. Implementations mutate
/// `values` in place and must not remove or overwrite present entries.
pub trait DefaultFiller: Send + Sync {
    /// Populates defaults for fields declared in `attributes` but absent
    /// from `values`.
    fn fill_defaults(&self, values: &mut FieldValues, attributes: &IndexMap<String, Attribute>);
}

/// The stock fill policy.
///
/// Every declared field missing from the mapping is inserted as:
/// - the empty string for text types (so a required text field missing on
///   create is rejected as empty rather than silently skipped),
/// - the enumeration entry flagged as default, when one exists,
/// - null otherwise.
///
/// # Example
///
/// ```rust
/// use fieldguard::{Attribute, DefaultFiller, FieldType, FieldValues, StandardDefaultFiller};
/// use indexmap::IndexMap;
/// use serde_json::json;
///
/// let attrs = IndexMap::from_iter([(
///     "level".to_string(),
///     Attribute::new("level", FieldType::Enum)
///         .with_option(json!([{"id": "low", "is_default": true}, {"id": "high"}])),
/// )]);
///
/// let mut values = FieldValues::new();
/// StandardDefaultFiller.fill_defaults(&mut values, &attrs);
/// assert_eq!(values["level"], json!("low"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDefaultFiller;

impl DefaultFiller for StandardDefaultFiller {
    fn fill_defaults(&self, values: &mut FieldValues, attributes: &IndexMap<String, Attribute>) {
        for (id, attr) in attributes {
            if values.contains_key(id) {
                continue;
            }
            let default = match attr.field_type {
                FieldType::ShortText | FieldType::LongText => Value::String(String::new()),
                FieldType::Enum => parse_enum_option(&attr.option)
                    .into_iter()
                    .find(|entry| entry.is_default)
                    .map(|entry| Value::String(entry.id))
                    .unwrap_or(Value::Null),
                _ => Value::Null,
            };
            tracing::debug!(field = id.as_str(), "filling default for missing field");
            values.insert(id.clone(), default);
        }
    }
}
