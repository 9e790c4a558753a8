//! # Fieldguard
//!
//! Schema-driven attribute validation for configuration-management stores.
//!
//! Given a flat mapping of field names to raw values, fieldguard checks
//! each value against a per-object schema describing the field's declared
//! type, required-ness, uniqueness, and type-specific constraints (length
//! limits, numeric ranges, regular expressions, enumerations,
//! date/time/timezone formats). It is the decision boundary between
//! arbitrary client input and the persisted record: validation is
//! fail-fast, and the first violation is returned with the offending field
//! identifier attached.
//!
//! ## Core types
//!
//! - [`Attribute`] / [`FieldType`]: the per-field schema record and its
//!   declared type.
//! - [`ValidationSession`]: binds one (owner, object) pair plus ignored
//!   fields, and drives a full run via [`ValidationSession::validate`].
//! - [`ValidationError`]: the single error a failed run returns.
//! - [`SchemaFetcher`] / [`DefaultFiller`] / [`UniqueChecker`]: the seams
//!   to the metadata service, create-time default filling, and persisted
//!   uniqueness checks.
//! - [`SchemaRegistry`]: an in-memory [`SchemaFetcher`] for embedding and
//!   tests.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use fieldguard::{
//!     Attribute, FieldType, FieldValues, SchemaRegistry, ValidationError, ValidationMode,
//!     ValidationSession,
//! };
//! use serde_json::json;
//!
//! let registry = SchemaRegistry::new();
//! registry
//!     .register("acme", "host", vec![
//!         Attribute::new("host_name", FieldType::ShortText).required(),
//!         Attribute::new("port", FieldType::Int)
//!             .with_option(json!({"min": "1", "max": "65535"})),
//!     ])
//!     .unwrap();
//!
//! let mut session = ValidationSession::new("acme", "host", Arc::new(registry));
//!
//! let mut values = FieldValues::from_iter([
//!     ("host_name".to_string(), json!("web-01")),
//!     ("port".to_string(), json!(70000)),
//! ]);
//!
//! let err = session
//!     .validate(&mut values, ValidationMode::Create)
//!     .unwrap_err();
//! assert_eq!(err, ValidationError::OutOfRange("port".to_string()));
//! ```

pub mod error;
pub mod fill;
pub mod options;
pub mod registry;
pub mod schema;
pub mod session;
pub mod unique;

mod validators;

pub use error::{SchemaFetchError, ValidationError};
pub use fill::{DefaultFiller, StandardDefaultFiller};
pub use registry::{RegistryError, SchemaRegistry};
pub use schema::{
    Attribute, FieldType, SchemaFetcher, FIELD_CHILD, FIELD_PARENT, LONG_TEXT_LIMIT,
    SHORT_TEXT_LIMIT,
};
pub use session::{ValidationMode, ValidationSession};
pub use unique::UniqueChecker;

/// The candidate value mapping under validation: field identifier to raw
/// value, iterated in insertion order.
///
/// Insertion order is the order fail-fast reporting follows when more than
/// one field is invalid.
pub type FieldValues = indexmap::IndexMap<String, serde_json::Value>;
