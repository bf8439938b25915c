//! Transport catalogue: stops, buses and road distances.
//!
//! The catalogue is immutable once built. Name lookups, the stop to buses
//! back-references and per-bus statistics are all read-only queries.

mod builder;
mod error;

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Bus, BusId, Stop, StopId};

pub use builder::CatalogueBuilder;
pub use error::CatalogueError;

/// Statistics reported for a bus.
#[derive(Debug, Clone, PartialEq)]
pub struct BusStat {
    /// Calls along the full traversal.
    pub stop_count: usize,
    /// Distinct stops served.
    pub unique_stop_count: usize,
    /// Road length of the full traversal in meters.
    pub route_length: u64,
    /// Road length divided by the great-circle length.
    pub curvature: f64,
}

/// Statistics reported for a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopStat<'a> {
    /// Names of the buses serving the stop, sorted.
    pub buses: Vec<&'a str>,
}

/// Immutable transport catalogue.
#[derive(Debug, Clone)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_index: HashMap<String, StopId>,
    bus_index: HashMap<String, BusId>,
    distances: HashMap<(StopId, StopId), u32>,
    /// Buses serving each stop, indexed by `StopId`.
    stop_buses: Vec<Vec<BusId>>,
}

impl TransportCatalogue {
    pub(crate) fn from_parts(
        stops: Vec<Stop>,
        buses: Vec<Bus>,
        stop_index: HashMap<String, StopId>,
        bus_index: HashMap<String, BusId>,
        distances: HashMap<(StopId, StopId), u32>,
        stop_buses: Vec<Vec<BusId>>,
    ) -> Self {
        Self {
            stops,
            buses,
            stop_index,
            bus_index,
            distances,
            stop_buses,
        }
    }

    /// All stops in insertion order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Look up a stop by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalogue.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// Look up a bus by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalogue.
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.0]
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_index.get(name).map(|id| self.stop(*id))
    }

    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|id| self.bus(*id))
    }

    /// Road distance from `from` to `to` in meters.
    ///
    /// Falls back to the distance recorded for `to` to `from` when the
    /// forward pair is absent.
    pub fn road_distance(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
    }

    /// Buses serving `stop`.
    pub fn buses_at(&self, stop: StopId) -> &[BusId] {
        &self.stop_buses[stop.0]
    }

    /// Names of the buses serving the named stop, sorted.
    ///
    /// Returns `None` for an unknown stop and an empty list for a stop no
    /// bus serves.
    pub fn buses_for_stop(&self, name: &str) -> Option<Vec<&str>> {
        let stop = self.find_stop(name)?;
        let mut names: Vec<&str> = self
            .buses_at(stop.id)
            .iter()
            .map(|id| self.bus(*id).name.as_str())
            .collect();
        names.sort_unstable();
        Some(names)
    }

    /// Statistics for the named stop, or `None` if unknown.
    pub fn stop_stat(&self, name: &str) -> Option<StopStat<'_>> {
        self.buses_for_stop(name).map(|buses| StopStat { buses })
    }

    /// Statistics for the named bus, or `None` if unknown.
    pub fn bus_stat(&self, name: &str) -> Option<BusStat> {
        let bus = self.find_bus(name)?;
        let route = bus.route_stops();

        let mut route_length = 0u64;
        let mut geo_length = 0.0;
        for hop in route.windows(2) {
            let (from, to) = (hop[0], hop[1]);
            match self.road_distance(from, to) {
                Some(meters) => route_length += u64::from(meters),
                None => trace!(bus = %bus.name, %from, %to, "No road distance for hop"),
            }
            geo_length += self
                .stop(from)
                .coordinates
                .distance_to(&self.stop(to).coordinates);
        }

        let curvature = if geo_length > 0.0 {
            route_length as f64 / geo_length
        } else {
            0.0
        };

        Some(BusStat {
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
            route_length,
            curvature,
        })
    }

    /// Stops served by at least one bus, sorted by name.
    pub fn served_stops_by_name(&self) -> Vec<&Stop> {
        let mut served: Vec<&Stop> = self
            .stops
            .iter()
            .filter(|stop| !self.buses_at(stop.id).is_empty())
            .collect();
        served.sort_by(|a, b| a.name.cmp(&b.name));
        served
    }

    /// All buses, sorted by name.
    pub fn buses_by_name(&self) -> Vec<&Bus> {
        let mut buses: Vec<&Bus> = self.buses.iter().collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));
        buses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;

    fn coords(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    /// The classic two-bus sample: a ring bus and a linear bus.
    fn sample() -> TransportCatalogue {
        let mut builder = CatalogueBuilder::new();
        builder
            .add_stop("Tolstopaltsevo", coords(55.611087, 37.20829))
            .add_stop("Marushkino", coords(55.595884, 37.209755))
            .add_stop("Rasskazovka", coords(55.632761, 37.333324))
            .add_stop("Biryulyovo Zapadnoye", coords(55.574371, 37.6517))
            .add_stop("Biryusinka", coords(55.581065, 37.64839))
            .add_stop("Universam", coords(55.587655, 37.645687))
            .add_stop("Biryulyovo Tovarnaya", coords(55.592028, 37.653656))
            .add_stop("Biryulyovo Passazhirskaya", coords(55.580999, 37.659164))
            .add_stop("Rossoshanskaya ulitsa", coords(55.595579, 37.605757))
            .add_stop("Prazhskaya", coords(55.611678, 37.603831))
            .add_distance("Tolstopaltsevo", "Marushkino", 3900)
            .add_distance("Marushkino", "Rasskazovka", 9900)
            .add_distance("Marushkino", "Marushkino", 100)
            .add_distance("Rasskazovka", "Marushkino", 9500)
            .add_distance("Biryulyovo Zapadnoye", "Rossoshanskaya ulitsa", 7500)
            .add_distance("Biryulyovo Zapadnoye", "Biryusinka", 1800)
            .add_distance("Biryulyovo Zapadnoye", "Universam", 2400)
            .add_distance("Biryusinka", "Universam", 750)
            .add_distance("Universam", "Rossoshanskaya ulitsa", 5600)
            .add_distance("Universam", "Biryulyovo Tovarnaya", 900)
            .add_distance("Biryulyovo Tovarnaya", "Biryulyovo Passazhirskaya", 1300)
            .add_distance("Biryulyovo Passazhirskaya", "Biryulyovo Zapadnoye", 1200)
            .add_bus(
                "256",
                [
                    "Biryulyovo Zapadnoye",
                    "Biryusinka",
                    "Universam",
                    "Biryulyovo Tovarnaya",
                    "Biryulyovo Passazhirskaya",
                    "Biryulyovo Zapadnoye",
                ],
                true,
            )
            .add_bus(
                "750",
                ["Tolstopaltsevo", "Marushkino", "Marushkino", "Rasskazovka"],
                false,
            );
        builder.build().unwrap()
    }

    #[test]
    fn ring_bus_stat() {
        let catalogue = sample();
        let stat = catalogue.bus_stat("256").unwrap();
        assert_eq!(stat.stop_count, 6);
        assert_eq!(stat.unique_stop_count, 5);
        assert_eq!(stat.route_length, 5950);
        assert!((stat.curvature - 1.36124).abs() < 1e-4);
    }

    #[test]
    fn linear_bus_stat() {
        let catalogue = sample();
        let stat = catalogue.bus_stat("750").unwrap();
        assert_eq!(stat.stop_count, 7);
        assert_eq!(stat.unique_stop_count, 3);
        assert_eq!(stat.route_length, 27400);
        assert!((stat.curvature - 1.30853).abs() < 1e-4);
    }

    #[test]
    fn unknown_bus_stat() {
        assert!(sample().bus_stat("751").is_none());
    }

    #[test]
    fn buses_for_stop() {
        let catalogue = sample();
        assert_eq!(catalogue.buses_for_stop("Universam"), Some(vec!["256"]));
        assert_eq!(
            catalogue.buses_for_stop("Prazhskaya"),
            Some(Vec::<&str>::new())
        );
        assert_eq!(catalogue.buses_for_stop("Samara"), None);
    }

    #[test]
    fn stop_stat_lists_sorted_buses() {
        let mut builder = CatalogueBuilder::new();
        builder
            .add_stop("A", coords(55.0, 37.0))
            .add_stop("B", coords(55.1, 37.1))
            .add_bus("828", ["A", "B"], false)
            .add_bus("14", ["B", "A", "B"], true)
            .add_bus("256", ["A"], false);
        let catalogue = builder.build().unwrap();

        let stat = catalogue.stop_stat("A").unwrap();
        assert_eq!(stat.buses, vec!["14", "256", "828"]);
        assert_eq!(catalogue.stop_stat("B").unwrap().buses, vec!["14", "828"]);
        assert!(catalogue.stop_stat("C").is_none());
    }

    #[test]
    fn road_distance_falls_back_to_reverse() {
        let catalogue = sample();
        let universam = catalogue.find_stop("Universam").unwrap().id;
        let biryusinka = catalogue.find_stop("Biryusinka").unwrap().id;
        assert_eq!(catalogue.road_distance(biryusinka, universam), Some(750));
        assert_eq!(catalogue.road_distance(universam, biryusinka), Some(750));

        let prazhskaya = catalogue.find_stop("Prazhskaya").unwrap().id;
        assert_eq!(catalogue.road_distance(universam, prazhskaya), None);
    }

    #[test]
    fn road_distance_prefers_forward_pair() {
        let catalogue = sample();
        let marushkino = catalogue.find_stop("Marushkino").unwrap().id;
        let rasskazovka = catalogue.find_stop("Rasskazovka").unwrap().id;
        assert_eq!(catalogue.road_distance(marushkino, rasskazovka), Some(9900));
        assert_eq!(catalogue.road_distance(rasskazovka, marushkino), Some(9500));
    }

    #[test]
    fn served_stops_exclude_unused() {
        let catalogue = sample();
        let names: Vec<&str> = catalogue
            .served_stops_by_name()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert!(!names.contains(&"Prazhskaya"));
        assert_eq!(names.first(), Some(&"Biryulyovo Passazhirskaya"));
        assert_eq!(names.len(), 8);
    }
}
