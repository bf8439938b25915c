//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from catalogue linking and routing errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(&'static str),

    /// A stop or bus was given an empty name
    #[error("name must not be empty")]
    EmptyName,

    /// A bus was given no stops
    #[error("bus {0} has no stops")]
    EmptyRoute(String),
}
