//! Router facade: build once, then answer fastest-route queries by stop name.

use std::sync::Arc;

use tracing::{debug, info};

use crate::catalogue::TransportCatalogue;

use super::builder::RouteGraph;
use super::itinerary::Itinerary;
use super::search::{PathFinder, RouteCacheConfig};
use super::{RouterError, RoutingSettings, Topology};

/// Fastest-route queries over an immutable transit network.
///
/// Owns the routing graph built once from the topology; the topology itself
/// is shared, so handles in the graph registries stay valid for the router's
/// lifetime.
#[derive(Debug)]
pub struct TransportRouter<T: Topology = TransportCatalogue> {
    topology: Arc<T>,
    settings: RoutingSettings,
    graph: RouteGraph,
    finder: PathFinder,
}

impl<T: Topology> TransportRouter<T> {
    /// Build the router with the default tree cache.
    pub fn build(topology: Arc<T>, settings: RoutingSettings) -> Result<Self, RouterError> {
        Self::with_cache_config(topology, settings, &RouteCacheConfig::default())
    }

    /// Build the router.
    ///
    /// # Errors
    ///
    /// Fails on invalid settings or when a route hop has no road distance.
    pub fn with_cache_config(
        topology: Arc<T>,
        settings: RoutingSettings,
        cache: &RouteCacheConfig,
    ) -> Result<Self, RouterError> {
        settings.validate()?;
        let graph = RouteGraph::build(topology.as_ref(), &settings)?;

        info!(
            vertices = graph.graph().vertex_count(),
            edges = graph.graph().edge_count(),
            wait = settings.bus_wait_time,
            velocity = settings.bus_velocity,
            "Transport router ready"
        );

        Ok(Self {
            topology,
            settings,
            graph,
            finder: PathFinder::new(cache),
        })
    }

    /// Fastest itinerary between two named stops.
    ///
    /// Returns `None` when either stop is unknown, is not served by any bus,
    /// or the destination cannot be reached.
    pub fn find_route(&self, from: &str, to: &str) -> Option<Itinerary> {
        let from_vertex = self.vertex_of(from)?;
        let to_vertex = self.vertex_of(to)?;

        let Some(route) = self.finder.find(self.graph.graph(), from_vertex, to_vertex) else {
            debug!(from, to, "Destination unreachable");
            return None;
        };

        let itinerary = Itinerary::from_route(
            &route,
            &self.graph,
            self.topology.as_ref(),
            &self.settings,
        );
        debug!(
            from,
            to,
            total_time = itinerary.total_time,
            boardings = itinerary.boardings(),
            "Route found"
        );
        Some(itinerary)
    }

    fn vertex_of(&self, name: &str) -> Option<usize> {
        let stop = self.topology.find_stop(name)?;
        let vertex = self.graph.vertex(stop);
        if vertex.is_none() {
            debug!(stop = name, "Stop not served by any bus");
        }
        vertex
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Number of cached shortest-path trees.
    pub fn cached_trees(&self) -> u64 {
        self.finder.cached_trees()
    }
}
