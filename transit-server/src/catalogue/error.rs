//! Catalogue linking errors.

use crate::domain::DomainError;

/// Errors raised while linking base requests into a catalogue.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    /// The same stop name was added twice
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),

    /// The same bus name was added twice
    #[error("duplicate bus: {0}")]
    DuplicateBus(String),

    /// A bus or distance refers to a stop that was never added
    #[error("unknown stop {stop} referenced by {referrer}")]
    UnknownStop { stop: String, referrer: String },

    /// A stop or bus failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogueError::DuplicateStop("Biryulyovo".into());
        assert_eq!(err.to_string(), "duplicate stop: Biryulyovo");

        let err = CatalogueError::UnknownStop {
            stop: "Nowhere".into(),
            referrer: "bus 14".into(),
        };
        assert_eq!(err.to_string(), "unknown stop Nowhere referenced by bus 14");

        let err = CatalogueError::from(DomainError::EmptyName);
        assert_eq!(err.to_string(), "name must not be empty");
    }
}
