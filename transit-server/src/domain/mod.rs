//! Domain types for the transit catalogue.
//!
//! This module contains the core domain model types: stops, buses and
//! geographic coordinates. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod bus;
mod error;
mod geo;
mod stop;

pub use bus::{Bus, BusId, RouteKind};
pub use error::DomainError;
pub use geo::{Coordinates, EARTH_RADIUS_M};
pub use stop::{Stop, StopId};
