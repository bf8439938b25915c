//! Read-only view of the transit network consumed by the router.

use crate::catalogue::TransportCatalogue;
use crate::domain::{BusId, StopId};

/// Trait for providing transit topology to the graph builder.
///
/// This abstraction allows the router to be tested with hand-built
/// networks and keeps it independent of how the catalogue stores data.
pub trait Topology {
    /// All buses, in a stable order.
    fn all_buses(&self) -> Vec<BusId>;

    /// All stops, served or not.
    fn all_stops(&self) -> Vec<StopId>;

    /// Stored stop sequence of `bus` (the forward leg for linear buses).
    fn stops_of(&self, bus: BusId) -> &[StopId];

    /// Whether `bus` runs its stop list once instead of out and back.
    fn is_ring(&self, bus: BusId) -> bool;

    /// Road distance in meters, falling back to the reverse pair.
    fn road_distance(&self, from: StopId, to: StopId) -> Option<u32>;

    /// Resolve a stop by name.
    fn find_stop(&self, name: &str) -> Option<StopId>;

    fn stop_name(&self, stop: StopId) -> &str;

    fn bus_name(&self, bus: BusId) -> &str;
}

impl Topology for TransportCatalogue {
    fn all_buses(&self) -> Vec<BusId> {
        self.buses().iter().map(|bus| bus.id).collect()
    }

    fn all_stops(&self) -> Vec<StopId> {
        self.stops().iter().map(|stop| stop.id).collect()
    }

    fn stops_of(&self, bus: BusId) -> &[StopId] {
        self.bus(bus).stops()
    }

    fn is_ring(&self, bus: BusId) -> bool {
        self.bus(bus).is_ring()
    }

    fn road_distance(&self, from: StopId, to: StopId) -> Option<u32> {
        TransportCatalogue::road_distance(self, from, to)
    }

    fn find_stop(&self, name: &str) -> Option<StopId> {
        TransportCatalogue::find_stop(self, name).map(|stop| stop.id)
    }

    fn stop_name(&self, stop: StopId) -> &str {
        &self.stop(stop).name
    }

    fn bus_name(&self, bus: BusId) -> &str {
        &self.bus(bus).name
    }
}
