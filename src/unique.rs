//! Uniqueness check seam.

use crate::error::ValidationError;
use crate::FieldValues;

/// Enforces that unique-flagged fields do not collide with already
/// persisted records.
///
/// Invoked by the session only after every field has passed its type and
/// constraint checks, so implementations can assume well-formed values.
/// The actual store lookup lives outside this crate; implementations
/// typically consult the session's
/// [`unique_fields`](crate::ValidationSession::unique_fields) set captured
/// at construction time.
pub trait UniqueChecker: Send + Sync {
    /// Checks a candidate mapping about to be persisted as a new record.
    fn check_create_unique(&self, values: &FieldValues) -> Result<(), ValidationError>;

    /// Checks a candidate mapping about to update the record identified by
    /// `instance_id`; the record itself is exempt from the collision check.
    fn check_update_unique(
        &self,
        values: &FieldValues,
        instance_id: i64,
    ) -> Result<(), ValidationError>;
}
