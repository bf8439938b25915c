//! Stop types.

use std::fmt;

use super::{Coordinates, DomainError};

/// Dense handle of a stop, issued by the catalogue in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop#{}", self.0)
    }
}

/// A named stop with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub coordinates: Coordinates,
}

impl Stop {
    /// Create a stop, rejecting an empty name.
    pub fn new(
        id: StopId,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            coordinates,
        })
    }
}
