//! Validation session and dispatch.
//!
//! A [`ValidationSession`] binds one (owner, object) pair and a set of
//! ignored fields, and drives a full validation run: schema load, create
//! default-fill, per-field dispatch, and final uniqueness delegation.

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{SchemaFetchError, ValidationError};
use crate::fill::DefaultFiller;
use crate::schema::{Attribute, SchemaFetcher, FIELD_CHILD, FIELD_PARENT};
use crate::unique::UniqueChecker;
use crate::validators;
use crate::FieldValues;

/// Whether a run validates a record about to be created or an update to an
/// existing record.
///
/// The mode selects which uniqueness check runs afterwards, and only
/// `Create` triggers default filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// A new record; missing fields may be default-filled first.
    Create,
    /// An update to the record with this instance identifier.
    Update(i64),
}

/// Per-call validation context for one (owner, object) pair.
///
/// The session loads the attribute schema afresh at the start of every
/// [`validate`](Self::validate) call, so constraint data is always current
/// even when the schema changes between writes. Because loading mutates the
/// session in place, a session must not be shared across simultaneous
/// validate calls; create one per in-flight validation.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use fieldguard::{
///     Attribute, FieldType, FieldValues, SchemaRegistry, ValidationMode, ValidationSession,
/// };
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry
///     .register("acme", "host", vec![
///         Attribute::new("host_name", FieldType::ShortText).required(),
///         Attribute::new("port", FieldType::Int)
///             .with_option(json!({"min": "1", "max": "65535"})),
///     ])
///     .unwrap();
///
/// let mut session = ValidationSession::new("acme", "host", Arc::new(registry));
/// let mut values = FieldValues::from_iter([
///     ("host_name".to_string(), json!("web-01")),
///     ("port".to_string(), json!(8080)),
/// ]);
///
/// assert!(session.validate(&mut values, ValidationMode::Create).is_ok());
/// ```
pub struct ValidationSession {
    owner_id: String,
    object_id: String,
    attributes: IndexMap<String, Attribute>,
    required: HashSet<String>,
    unique: HashSet<String>,
    ignored: HashSet<String>,
    fetcher: Arc<dyn SchemaFetcher>,
    filler: Option<Arc<dyn DefaultFiller>>,
    unique_checker: Option<Arc<dyn UniqueChecker>>,
}

impl ValidationSession {
    /// Creates a session for one (owner, object) pair with no ignored
    /// fields and no collaborators configured.
    pub fn new(
        owner_id: impl Into<String>,
        object_id: impl Into<String>,
        fetcher: Arc<dyn SchemaFetcher>,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            object_id: object_id.into(),
            attributes: IndexMap::new(),
            required: HashSet::new(),
            unique: HashSet::new(),
            ignored: HashSet::new(),
            fetcher,
            filler: None,
            unique_checker: None,
        }
    }

    /// Adds field names the session skips entirely, schema-declared or not.
    /// Typical candidates are system-managed identifiers the caller injects
    /// into the mapping itself.
    pub fn ignore_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Configures the default filler run before create-mode checks.
    /// Without one, create mode validates the mapping as given.
    pub fn default_filler(mut self, filler: Arc<dyn DefaultFiller>) -> Self {
        self.filler = Some(filler);
        self
    }

    /// Configures the uniqueness checker consulted after all fields pass.
    /// Without one, uniqueness is not enforced.
    pub fn unique_checker(mut self, checker: Arc<dyn UniqueChecker>) -> Self {
        self.unique_checker = Some(checker);
        self
    }

    /// Reloads the attribute schema for this session's (owner, object)
    /// pair, fully replacing any previously loaded state.
    ///
    /// The reserved structural linkage fields are stripped; they are never
    /// user-settable. Idempotent and safe to call repeatedly.
    pub fn load_schema(&mut self) -> Result<(), SchemaFetchError> {
        let fetched = self
            .fetcher
            .fetch_attributes(&self.owner_id, &self.object_id)
            .map_err(|err| {
                tracing::error!(
                    owner = self.owner_id.as_str(),
                    object = self.object_id.as_str(),
                    error = %err,
                    "failed to load attribute schema"
                );
                err
            })?;

        self.attributes.clear();
        self.required.clear();
        self.unique.clear();
        for attr in fetched {
            if attr.id == FIELD_PARENT || attr.id == FIELD_CHILD {
                continue;
            }
            if attr.required {
                self.required.insert(attr.id.clone());
            }
            if attr.unique {
                self.unique.insert(attr.id.clone());
            }
            self.attributes.insert(attr.id.clone(), attr);
        }
        Ok(())
    }

    /// Validates a candidate value mapping, fail-fast.
    ///
    /// Reloads the schema, default-fills `values` in create mode, then
    /// checks each field in the mapping's insertion order: ignored fields
    /// are skipped, fields absent from the schema fail with
    /// [`ValidationError::UnknownField`], and everything else dispatches to
    /// the validator for the field's declared type. The first violation
    /// aborts the run. When every field passes, the uniqueness checker for
    /// the given mode has the final say.
    pub fn validate(
        &mut self,
        values: &mut FieldValues,
        mode: ValidationMode,
    ) -> Result<(), ValidationError> {
        self.load_schema()?;

        if mode == ValidationMode::Create {
            if let Some(filler) = &self.filler {
                filler.fill_defaults(values, &self.attributes);
            }
        }

        for (field, value) in values.iter() {
            if self.ignored.contains(field) {
                continue;
            }
            let attr = match self.attributes.get(field) {
                Some(attr) => attr,
                None => {
                    tracing::warn!(field = field.as_str(), "field not declared in schema");
                    return Err(ValidationError::UnknownField(field.clone()));
                }
            };
            validators::dispatch(attr, self.required.contains(field), value, field)?;
        }

        match (mode, &self.unique_checker) {
            (ValidationMode::Create, Some(checker)) => checker.check_create_unique(values),
            (ValidationMode::Update(instance_id), Some(checker)) => {
                checker.check_update_unique(values, instance_id)
            }
            (_, None) => Ok(()),
        }
    }

    /// The attribute definitions from the most recent schema load, keyed by
    /// field identifier in schema-declaration order.
    pub fn attributes(&self) -> &IndexMap<String, Attribute> {
        &self.attributes
    }

    /// Field identifiers flagged as required in the loaded schema.
    pub fn required_fields(&self) -> &HashSet<String> {
        &self.required
    }

    /// Field identifiers flagged as unique in the loaded schema. Consulted
    /// by uniqueness-checker implementations, not by the type validators.
    pub fn unique_fields(&self) -> &HashSet<String> {
        &self.unique
    }

    /// Field names this session skips.
    pub fn ignored_fields(&self) -> &HashSet<String> {
        &self.ignored
    }
}
