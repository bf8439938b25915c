//! Fastest-route planning over the bus network.
//!
//! The network is turned into a directed graph whose vertices are served
//! stops. Each edge means "wait for a bus here, then ride it for some hops
//! without getting off", weighted in minutes. Dijkstra over that graph gives
//! the fastest trip, which is then translated back into waits and rides.

mod builder;
mod config;
mod graph;
mod itinerary;
mod search;
mod topology;
mod transport_router;


pub use builder::{EdgeSpan, RouteGraph};
pub use config::RoutingSettings;
pub use graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
pub use itinerary::{Itinerary, ItineraryItem};
pub use search::{PathFinder, RouteCacheConfig, RouteInfo, ShortestPathTree};
pub use topology::Topology;
pub use transport_router::TransportRouter;

/// Error from building or querying the router.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterError {
    /// Routing settings out of range
    #[error("invalid routing settings: {0}")]
    InvalidSettings(&'static str),

    /// A hop on a bus route has no road distance in either direction
    #[error("bus {bus}: no road distance between {from} and {to}")]
    MissingDistance {
        bus: String,
        from: String,
        to: String,
    },

    /// A route query arrived before routing settings were supplied
    #[error("router not initialized: routing settings missing")]
    NotInitialized,
}
