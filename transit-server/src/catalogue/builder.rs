//! Two-phase catalogue construction.
//!
//! Base requests arrive in any order: a bus may name stops that are added
//! later, and distances may mention stops not yet seen. The builder only
//! records names; [`CatalogueBuilder::build`] resolves them in one linking
//! pass and publishes an immutable [`TransportCatalogue`].

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Bus, BusId, Coordinates, RouteKind, Stop, StopId};

use super::{CatalogueError, TransportCatalogue};

#[derive(Debug, Clone)]
struct PendingBus {
    name: String,
    stops: Vec<String>,
    kind: RouteKind,
}

/// Collects stops, distances and buses by name.
#[derive(Debug, Clone, Default)]
pub struct CatalogueBuilder {
    stops: Vec<(String, Coordinates)>,
    distances: Vec<(String, String, u32)>,
    buses: Vec<PendingBus>,
}

impl CatalogueBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop.
    pub fn add_stop(&mut self, name: impl Into<String>, coordinates: Coordinates) -> &mut Self {
        self.stops.push((name.into(), coordinates));
        self
    }

    /// Record the road distance driving from `from` to `to`.
    ///
    /// The reverse direction falls back to this value unless it is recorded too.
    pub fn add_distance(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        meters: u32,
    ) -> &mut Self {
        self.distances.push((from.into(), to.into(), meters));
        self
    }

    /// Add a bus.
    ///
    /// A round trip keeps `stops` as given; otherwise `stops` is the forward
    /// leg and the bus returns over it in reverse.
    pub fn add_bus<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        stops: impl IntoIterator<Item = S>,
        is_roundtrip: bool,
    ) -> &mut Self {
        self.buses.push(PendingBus {
            name: name.into(),
            stops: stops.into_iter().map(Into::into).collect(),
            kind: if is_roundtrip {
                RouteKind::Ring
            } else {
                RouteKind::Linear
            },
        });
        self
    }

    /// Resolve all names and publish the catalogue.
    pub fn build(self) -> Result<TransportCatalogue, CatalogueError> {
        let mut stops = Vec::with_capacity(self.stops.len());
        let mut stop_index = HashMap::with_capacity(self.stops.len());
        for (name, coordinates) in self.stops {
            if stop_index.contains_key(&name) {
                return Err(CatalogueError::DuplicateStop(name));
            }
            let id = StopId(stops.len());
            stop_index.insert(name.clone(), id);
            stops.push(Stop::new(id, name, coordinates)?);
        }

        let resolve = |name: &str, referrer: &dyn Fn() -> String| {
            stop_index
                .get(name)
                .copied()
                .ok_or_else(|| CatalogueError::UnknownStop {
                    stop: name.to_string(),
                    referrer: referrer(),
                })
        };

        let mut distances = HashMap::with_capacity(self.distances.len());
        for (from, to, meters) in &self.distances {
            let referrer = || format!("distance from {from}");
            let from_id = resolve(from.as_str(), &referrer)?;
            let to_id = resolve(to.as_str(), &referrer)?;
            distances.insert((from_id, to_id), *meters);
        }

        let mut buses = Vec::with_capacity(self.buses.len());
        let mut bus_index = HashMap::with_capacity(self.buses.len());
        let mut stop_buses: Vec<Vec<BusId>> = vec![Vec::new(); stops.len()];
        for pending in self.buses {
            if bus_index.contains_key(&pending.name) {
                return Err(CatalogueError::DuplicateBus(pending.name));
            }
            let referrer = || format!("bus {}", pending.name);
            let route = pending
                .stops
                .iter()
                .map(|name| resolve(name.as_str(), &referrer))
                .collect::<Result<Vec<_>, _>>()?;

            let id = BusId(buses.len());
            for stop in &route {
                let served_by = &mut stop_buses[stop.0];
                if !served_by.contains(&id) {
                    served_by.push(id);
                }
            }
            bus_index.insert(pending.name.clone(), id);
            buses.push(Bus::new(id, pending.name, route, pending.kind)?);
        }

        debug!(
            stops = stops.len(),
            buses = buses.len(),
            distances = distances.len(),
            "Catalogue linked"
        );

        Ok(TransportCatalogue::from_parts(
            stops, buses, stop_index, bus_index, distances, stop_buses,
        ))
    }
}
