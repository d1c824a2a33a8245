//! Error types for the `nibog-core` crate.
//!
//! All fallible catalog and form operations return [`CatalogError`].

use nibog_types::CityId;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No city exists under the requested identifier.
    ///
    /// Carries the identifier exactly as requested, since it may not even
    /// parse as a [`CityId`].
    #[error("city not found: {0}")]
    CityNotFound(String),

    /// The edit form for this city already has a save in flight.
    #[error("a save is already in progress for city {0}")]
    SubmissionInFlight(CityId),

    /// A delete for this city is already in flight.
    #[error("city {0} is already being deleted")]
    DeleteInFlight(CityId),

    /// One or more required fields were left empty.
    #[error("required fields missing: {}", .0.join(", "))]
    MissingField(Vec<String>),

    /// The identifier space is exhausted.
    #[error("no identifiers left for new cities")]
    IdsExhausted,

    /// The built-in seed data is malformed.
    #[error("invalid seed data: {0}")]
    InvalidSeed(String),
}
