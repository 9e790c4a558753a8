//! In-memory schema storage.
//!
//! This module provides [`SchemaRegistry`], a thread-safe in-memory
//! [`SchemaFetcher`]. It serves embedded deployments and tests directly,
//! and can sit in front of a remote fetcher as a caching layer without
//! changing the session's always-refetch behavior.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::SchemaFetchError;
use crate::schema::{Attribute, SchemaFetcher};

/// Type alias for the schema storage map, keyed by (owner, object).
type SchemaMap = Arc<RwLock<HashMap<(String, String), Vec<Attribute>>>>;

/// A thread-safe registry of attribute schemas, keyed by (owner, object).
///
/// Cloning a registry shares the underlying storage, so a clone handed to a
/// [`ValidationSession`](crate::ValidationSession) observes later
/// registrations: sessions re-fetch on every validate call and pick up
/// schema changes between calls.
///
/// # Thread safety
///
/// Storage sits behind a `parking_lot::RwLock`: fetches from concurrent
/// sessions take read locks, registration takes a write lock.
///
/// # Example
///
/// ```rust
/// use fieldguard::{Attribute, FieldType, SchemaRegistry};
///
/// let registry = SchemaRegistry::new();
/// registry
///     .register("acme", "host", vec![
///         Attribute::new("host_name", FieldType::ShortText).required(),
///     ])
///     .unwrap();
///
/// assert!(registry.contains("acme", "host"));
///
/// // Duplicate registration fails; use replace to overwrite.
/// assert!(registry.register("acme", "host", vec![]).is_err());
/// ```
pub struct SchemaRegistry {
    schemas: SchemaMap,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers the attribute schema for an (owner, object) pair.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] when the pair already has a
    /// registered schema.
    pub fn register(
        &self,
        owner_id: impl Into<String>,
        object_id: impl Into<String>,
        attributes: Vec<Attribute>,
    ) -> Result<(), RegistryError> {
        let key = (owner_id.into(), object_id.into());
        let mut schemas = self.schemas.write();

        if schemas.contains_key(&key) {
            return Err(RegistryError::Duplicate {
                owner_id: key.0,
                object_id: key.1,
            });
        }

        schemas.insert(key, attributes);
        Ok(())
    }

    /// Registers or overwrites the attribute schema for an (owner, object)
    /// pair.
    pub fn replace(
        &self,
        owner_id: impl Into<String>,
        object_id: impl Into<String>,
        attributes: Vec<Attribute>,
    ) {
        self.schemas
            .write()
            .insert((owner_id.into(), object_id.into()), attributes);
    }

    /// Removes the schema for an (owner, object) pair, returning it if it
    /// was registered.
    pub fn remove(&self, owner_id: &str, object_id: &str) -> Option<Vec<Attribute>> {
        self.schemas
            .write()
            .remove(&(owner_id.to_string(), object_id.to_string()))
    }

    /// Returns a copy of the schema for an (owner, object) pair.
    pub fn get(&self, owner_id: &str, object_id: &str) -> Option<Vec<Attribute>> {
        self.schemas
            .read()
            .get(&(owner_id.to_string(), object_id.to_string()))
            .cloned()
    }

    /// Whether a schema is registered for the (owner, object) pair.
    pub fn contains(&self, owner_id: &str, object_id: &str) -> bool {
        self.schemas
            .read()
            .contains_key(&(owner_id.to_string(), object_id.to_string()))
    }

    /// Number of registered (owner, object) schemas.
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// Whether the registry holds no schemas.
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SchemaRegistry {
    fn clone(&self) -> Self {
        Self {
            schemas: Arc::clone(&self.schemas),
        }
    }
}

impl SchemaFetcher for SchemaRegistry {
    fn fetch_attributes(
        &self,
        owner_id: &str,
        object_id: &str,
    ) -> Result<Vec<Attribute>, SchemaFetchError> {
        self.get(owner_id, object_id).ok_or_else(|| {
            SchemaFetchError::Transport(format!(
                "no schema registered for {owner_id}/{object_id}"
            ))
        })
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a schema for a pair that already has one.
    #[error("schema for {owner_id}/{object_id} already registered")]
    Duplicate {
        /// Owner of the already registered schema.
        owner_id: String,
        /// Object of the already registered schema.
        object_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldType;

    fn host_schema() -> Vec<Attribute> {
        vec![Attribute::new("host_name", FieldType::ShortText)]
    }

    #[test]
    fn test_register_and_fetch() {
        let registry = SchemaRegistry::new();
        registry.register("acme", "host", host_schema()).unwrap();

        let attrs = registry.fetch_attributes("acme", "host").unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].id, "host_name");
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let registry = SchemaRegistry::new();
        registry.register("acme", "host", host_schema()).unwrap();

        let err = registry.register("acme", "host", vec![]).unwrap_err();
        assert!(err.to_string().contains("acme/host"));
    }

    #[test]
    fn test_replace_overwrites() {
        let registry = SchemaRegistry::new();
        registry.register("acme", "host", host_schema()).unwrap();
        registry.replace("acme", "host", vec![]);

        assert_eq!(registry.fetch_attributes("acme", "host").unwrap().len(), 0);
    }

    #[test]
    fn test_fetch_unregistered_is_transport_error() {
        let registry = SchemaRegistry::new();
        let err = registry.fetch_attributes("acme", "switch").unwrap_err();
        assert!(matches!(err, SchemaFetchError::Transport(_)));
    }

    #[test]
    fn test_remove_and_contains() {
        let registry = SchemaRegistry::new();
        registry.register("acme", "host", host_schema()).unwrap();
        assert!(registry.contains("acme", "host"));
        assert_eq!(registry.len(), 1);

        let removed = registry.remove("acme", "host").unwrap();
        assert_eq!(removed.len(), 1);
        assert!(!registry.contains("acme", "host"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clone_shares_storage() {
        let registry = SchemaRegistry::new();
        let clone = registry.clone();
        registry.register("acme", "host", host_schema()).unwrap();

        assert!(clone.contains("acme", "host"));
    }
}
