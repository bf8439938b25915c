//! Graph construction from transit topology.
//!
//! Every stop used by a route becomes one vertex. For each bus and each
//! boarding stop, an edge is emitted to every later stop reachable without
//! leaving the bus, so a rider pays the wait once per boarding and never
//! mid-ride. Linear buses additionally get the mirrored edges for the return
//! leg, weighted by the reverse-direction road distances.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::{BusId, StopId};

use super::graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
use super::{RouterError, RoutingSettings, Topology};

/// What a graph edge stands for: riding `bus` over `span_count` hops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpan {
    pub bus: BusId,
    pub span_count: usize,
}

/// The routing graph plus its stop and edge registries.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    graph: DirectedWeightedGraph,
    stop_vertex: HashMap<StopId, VertexId>,
    vertex_stop: Vec<StopId>,
    /// Indexed by `EdgeId`.
    edge_spans: Vec<EdgeSpan>,
}

impl RouteGraph {
    /// Build the graph for every bus in `topology`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::MissingDistance`] when a traversed hop has no
    /// road distance in either direction.
    pub fn build<T: Topology>(
        topology: &T,
        settings: &RoutingSettings,
    ) -> Result<Self, RouterError> {
        let buses = topology.all_buses();
        let vertex_count = buses
            .iter()
            .flat_map(|bus| topology.stops_of(*bus))
            .collect::<HashSet<_>>()
            .len();

        let mut route_graph = RouteGraph {
            graph: DirectedWeightedGraph::new(vertex_count),
            stop_vertex: HashMap::with_capacity(vertex_count),
            vertex_stop: Vec::with_capacity(vertex_count),
            edge_spans: Vec::new(),
        };

        for bus in buses {
            route_graph.add_bus(topology, settings, bus)?;
        }

        debug!(
            stops = topology.all_stops().len(),
            vertices = route_graph.graph.vertex_count(),
            edges = route_graph.graph.edge_count(),
            "Routing graph built"
        );

        Ok(route_graph)
    }

    fn add_bus<T: Topology>(
        &mut self,
        topology: &T,
        settings: &RoutingSettings,
        bus: BusId,
    ) -> Result<(), RouterError> {
        let stops = topology.stops_of(bus);
        let mirrored = !topology.is_ring(bus);

        for &stop in stops {
            self.vertex_for(stop);
        }

        let hop = |from: StopId, to: StopId| {
            topology
                .road_distance(from, to)
                .map(f64::from)
                .ok_or_else(|| RouterError::MissingDistance {
                    bus: topology.bus_name(bus).to_string(),
                    from: topology.stop_name(from).to_string(),
                    to: topology.stop_name(to).to_string(),
                })
        };

        let edges_before = self.graph.edge_count();
        for (start, &origin) in stops.iter().enumerate() {
            let mut forward = 0.0;
            let mut backward = 0.0;
            for end in start + 1..stops.len() {
                let (prev, current) = (stops[end - 1], stops[end]);
                let span_count = end - start;

                forward += hop(prev, current)?;
                self.add_edge(origin, current, settings.edge_weight(forward), bus, span_count);

                if mirrored {
                    backward += hop(current, prev)?;
                    self.add_edge(current, origin, settings.edge_weight(backward), bus, span_count);
                }
            }
        }

        trace!(
            bus = topology.bus_name(bus),
            edges = self.graph.edge_count() - edges_before,
            "Bus edges added"
        );
        Ok(())
    }

    /// Vertex of `stop`, assigning the next free id on first sight.
    fn vertex_for(&mut self, stop: StopId) -> VertexId {
        if let Some(&vertex) = self.stop_vertex.get(&stop) {
            return vertex;
        }
        let vertex = self.vertex_stop.len();
        self.stop_vertex.insert(stop, vertex);
        self.vertex_stop.push(stop);
        vertex
    }

    fn add_edge(&mut self, from: StopId, to: StopId, weight: f64, bus: BusId, span_count: usize) {
        let edge = Edge {
            from: self.vertex_for(from),
            to: self.vertex_for(to),
            weight,
        };
        let id = self.graph.add_edge(edge);
        debug_assert_eq!(id, self.edge_spans.len());
        self.edge_spans.push(EdgeSpan { bus, span_count });
    }

    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Vertex of `stop`, or `None` if no route uses it.
    pub fn vertex(&self, stop: StopId) -> Option<VertexId> {
        self.stop_vertex.get(&stop).copied()
    }

    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn stop(&self, vertex: VertexId) -> StopId {
        self.vertex_stop[vertex]
    }

    /// # Panics
    ///
    /// Panics if `edge` is out of range.
    pub fn span(&self, edge: EdgeId) -> EdgeSpan {
        self.edge_spans[edge]
    }
}
