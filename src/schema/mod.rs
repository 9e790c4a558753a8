//! Attribute schema definitions.
//!
//! This module provides [`Attribute`], the per-field schema record fetched
//! from the metadata service, and [`FieldType`], the closed set of declared
//! field types the validator knows how to check.

mod fetch;

pub use fetch::SchemaFetcher;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum character count for a short text field.
pub const SHORT_TEXT_LIMIT: usize = 256;

/// Maximum character count for a long text field.
pub const LONG_TEXT_LIMIT: usize = 2000;

/// Reserved structural field linking an instance to its parent.
/// Never user-settable; stripped at schema load.
pub const FIELD_PARENT: &str = "parent";

/// Reserved structural field linking an instance to its children.
/// Never user-settable; stripped at schema load.
pub const FIELD_CHILD: &str = "child";

/// The declared type of a field.
///
/// Deserializes from the metadata service's type tags. Tags the validator
/// does not recognize deserialize to [`FieldType::Other`]; values of an
/// `Other`-typed field are accepted without validation, so a newer metadata
/// service can introduce types without breaking older validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Short text, up to [`SHORT_TEXT_LIMIT`] characters.
    #[serde(rename = "singlechar")]
    ShortText,
    /// Long text, up to [`LONG_TEXT_LIMIT`] characters.
    #[serde(rename = "longchar")]
    LongText,
    /// 64-bit signed integer, optionally bounded.
    Int,
    /// One identifier out of a declared enumeration.
    Enum,
    /// Calendar date in `YYYY-MM-DD` form.
    Date,
    /// Time of day in `HH:MM:SS` form.
    Time,
    /// IANA-style timezone name.
    #[serde(rename = "timezone")]
    TimeZone,
    /// Boolean.
    Bool,
    /// Any type this validator does not recognize; passes unconditionally.
    #[serde(other)]
    Other,
}

/// Schema record describing one field of an object type.
///
/// The `option` payload is opaque here; its shape depends on `field_type`
/// and is decoded on demand by the option decoders in [`crate::options`]:
/// a regex string for text types, stringified `min`/`max` bounds for
/// integers, an ordered entry list for enumerations, unused otherwise.
///
/// # Example
///
/// ```rust
/// use fieldguard::{Attribute, FieldType};
/// use serde_json::json;
///
/// let attr: Attribute = serde_json::from_value(json!({
///     "id": "port",
///     "name": "Port",
///     "field_type": "int",
///     "required": true,
///     "unique": false,
///     "option": {"min": "1", "max": "65535"}
/// })).unwrap();
///
/// assert_eq!(attr.field_type, FieldType::Int);
/// assert!(attr.required);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Field identifier, unique within one (owner, object) schema.
    pub id: String,
    /// Display name; not consulted by validation.
    #[serde(default)]
    pub name: String,
    /// Declared type; immutable for the lifetime of a validation session.
    pub field_type: FieldType,
    /// Whether a value must be present (and non-empty, for text types).
    #[serde(default)]
    pub required: bool,
    /// Whether the value must be unique among persisted records.
    /// Enforced by the uniqueness collaborator, not by the type validators.
    #[serde(default)]
    pub unique: bool,
    /// Type-dependent constraint payload.
    #[serde(default)]
    pub option: Value,
}

impl Attribute {
    /// Creates an attribute with the given identifier and type, optional and
    /// unconstrained. Mostly useful for building schemas in tests and for
    /// seeding a [`SchemaRegistry`](crate::SchemaRegistry).
    pub fn new(id: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            field_type,
            required: false,
            unique: false,
            option: Value::Null,
        }
    }

    /// Marks the attribute as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the attribute as unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Sets the constraint payload.
    pub fn with_option(mut self, option: Value) -> Self {
        self.option = option;
        self
    }
}
