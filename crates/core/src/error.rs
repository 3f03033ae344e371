use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Every failure a service operation can produce maps to one of these
/// variants; the HTTP layer translates them into status codes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The operation targeted an entity id that does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Human-readable entity name, e.g. `"Request"`.
        entity: &'static str,
        /// The id that was looked up.
        id: DbId,
    },

    /// A required field was missing or carried an invalid value.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state (e.g. duplicate email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
