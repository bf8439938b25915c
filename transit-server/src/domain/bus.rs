//! Bus route types.

use std::collections::HashSet;
use std::fmt;

use super::{DomainError, StopId};

/// Dense handle of a bus, issued by the catalogue in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub usize);

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bus#{}", self.0)
    }
}

/// How a bus traverses its stop list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Runs the stop list once; a closed loop lists its first stop again at the end.
    Ring,
    /// Runs the stop list forward, then back over the same stops.
    Linear,
}

/// A bus route.
///
/// # Invariants
///
/// - `stops` is non-empty
/// - For [`RouteKind::Linear`] buses `stops` holds the forward leg only;
///   the return leg is derived by [`Bus::route_stops`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub id: BusId,
    pub name: String,
    stops: Vec<StopId>,
    kind: RouteKind,
}

impl Bus {
    /// Create a bus from its stored stop sequence.
    pub fn new(
        id: BusId,
        name: impl Into<String>,
        stops: Vec<StopId>,
        kind: RouteKind,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        if stops.is_empty() {
            return Err(DomainError::EmptyRoute(name));
        }
        Ok(Self {
            id,
            name,
            stops,
            kind,
        })
    }

    /// Stored stop sequence (the forward leg for linear buses).
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    pub fn is_ring(&self) -> bool {
        self.kind == RouteKind::Ring
    }

    /// Every stop the bus calls at, in travel order.
    ///
    /// A linear bus `[A, B, C]` yields `[A, B, C, B, A]`.
    pub fn route_stops(&self) -> Vec<StopId> {
        match self.kind {
            RouteKind::Ring => self.stops.clone(),
            RouteKind::Linear => self
                .stops
                .iter()
                .chain(self.stops.iter().rev().skip(1))
                .copied()
                .collect(),
        }
    }

    /// Number of calls along the full traversal.
    pub fn stop_count(&self) -> usize {
        match self.kind {
            RouteKind::Ring => self.stops.len(),
            RouteKind::Linear => self.stops.len() * 2 - 1,
        }
    }

    /// Number of distinct stops served.
    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// Stops where the bus name is labelled on the map.
    ///
    /// The first stop always; for linear buses also the last stop of the
    /// forward leg when it differs from the first.
    pub fn terminals(&self) -> Vec<StopId> {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if self.kind == RouteKind::Linear && first != last {
            vec![first, last]
        } else {
            vec![first]
        }
    }
}
