//! Domain-level error taxonomy.
//!
//! `CoreError` carries everything a handler needs to produce a precise
//! HTTP response without inspecting strings. Connectivity and storage
//! failures are wrapped at the API layer, not here.

use crate::types::DbId;

/// Domain error shared by repositories and handlers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id came back empty.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain validation rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state (e.g. duplicate slug).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An invariant was broken; details are logged, not surfaced.
    #[error("Internal error: {0}")]
    Internal(String),
}
