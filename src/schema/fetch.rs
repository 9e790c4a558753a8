//! Schema fetch seam.

use crate::error::SchemaFetchError;
use crate::schema::Attribute;

/// Source of attribute definitions for an (owner, object) pair.
///
/// A [`ValidationSession`](crate::ValidationSession) calls this at the start
/// of every `validate` invocation, so the constraint data is always as fresh
/// as the fetcher can provide. Implementations wrap the remote metadata
/// service; [`SchemaRegistry`](crate::SchemaRegistry) is an in-memory
/// implementation for embedding and tests, and can also serve as a caching
/// layer in front of a remote fetcher.
///
/// Implementations distinguish two failure shapes:
/// - [`SchemaFetchError::Transport`] when the call itself fails, and
/// - [`SchemaFetchError::Remote`] when the service answers but reports an
///   error code.
pub trait SchemaFetcher: Send + Sync {
    /// Fetches all attribute definitions declared for `object_id` under
    /// `owner_id`, in schema-declaration order.
    fn fetch_attributes(
        &self,
        owner_id: &str,
        object_id: &str,
    ) -> Result<Vec<Attribute>, SchemaFetchError>;
}
