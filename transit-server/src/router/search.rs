//! Single-source shortest paths over the routing graph.
//!
//! Weights are non-negative, so a binary-heap Dijkstra settles each vertex
//! once. A whole shortest-path tree is computed per source vertex and kept in
//! a bounded cache, so repeated queries from the same stop are lookups.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use moka::sync::Cache;
use tracing::trace;

use super::graph::{DirectedWeightedGraph, EdgeId, VertexId};

/// A shortest path: its edges in travel order and their summed weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub edges: Vec<EdgeId>,
    pub weight: f64,
}

/// Shortest distances and predecessor edges from one source vertex.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    distance: Vec<Option<f64>>,
    prev_edge: Vec<Option<EdgeId>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct QueueEntry {
    weight: f64,
    vertex: VertexId,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ShortestPathTree {
    /// Run Dijkstra from `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a vertex of `graph`.
    pub fn compute(graph: &DirectedWeightedGraph, source: VertexId) -> Self {
        assert!(source < graph.vertex_count(), "source vertex out of range");

        let vertex_count = graph.vertex_count();
        let mut distance = vec![None; vertex_count];
        let mut prev_edge = vec![None; vertex_count];
        let mut settled = vec![false; vertex_count];
        let mut queue = BinaryHeap::new();

        distance[source] = Some(0.0);
        queue.push(QueueEntry {
            weight: 0.0,
            vertex: source,
        });

        while let Some(QueueEntry { weight, vertex }) = queue.pop() {
            if settled[vertex] {
                continue;
            }
            settled[vertex] = true;

            for &edge_id in graph.outgoing(vertex) {
                let edge = graph.edge(edge_id);
                let candidate = weight + edge.weight;
                let improves = match distance[edge.to] {
                    Some(known) => candidate < known,
                    None => true,
                };
                if improves {
                    distance[edge.to] = Some(candidate);
                    prev_edge[edge.to] = Some(edge_id);
                    queue.push(QueueEntry {
                        weight: candidate,
                        vertex: edge.to,
                    });
                }
            }
        }

        Self {
            source,
            distance,
            prev_edge,
        }
    }

    /// Path from the source to `target`, or `None` if unreachable.
    ///
    /// # Panics
    ///
    /// Panics if `target` is not a vertex of `graph`.
    pub fn route_to(&self, graph: &DirectedWeightedGraph, target: VertexId) -> Option<RouteInfo> {
        let weight = self.distance[target]?;

        let mut edges = Vec::new();
        let mut vertex = target;
        while vertex != self.source {
            let edge_id = self.prev_edge[vertex]?;
            edges.push(edge_id);
            vertex = graph.edge(edge_id).from;
        }
        edges.reverse();

        Some(RouteInfo { edges, weight })
    }
}

/// Configuration for the shortest-path tree cache.
#[derive(Debug, Clone)]
pub struct RouteCacheConfig {
    /// Maximum number of cached trees; zero disables caching.
    pub max_capacity: u64,
}

impl Default for RouteCacheConfig {
    fn default() -> Self {
        Self { max_capacity: 256 }
    }
}

/// Shortest-path queries with a per-source tree cache.
pub struct PathFinder {
    trees: Option<Cache<VertexId, Arc<ShortestPathTree>>>,
}

impl PathFinder {
    pub fn new(config: &RouteCacheConfig) -> Self {
        let trees = (config.max_capacity > 0)
            .then(|| Cache::builder().max_capacity(config.max_capacity).build());
        Self { trees }
    }

    /// Minimum-weight path from `from` to `to`.
    ///
    /// `from == to` yields an empty path of weight zero.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of range.
    pub fn find(
        &self,
        graph: &DirectedWeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> Option<RouteInfo> {
        assert!(to < graph.vertex_count(), "target vertex out of range");
        self.tree(graph, from).route_to(graph, to)
    }

    fn tree(&self, graph: &DirectedWeightedGraph, source: VertexId) -> Arc<ShortestPathTree> {
        match &self.trees {
            Some(trees) => trees.get_with(source, || {
                trace!(source, "Computing shortest-path tree");
                Arc::new(ShortestPathTree::compute(graph, source))
            }),
            None => Arc::new(ShortestPathTree::compute(graph, source)),
        }
    }

    /// Number of cached trees (for monitoring).
    pub fn cached_trees(&self) -> u64 {
        self.trees.as_ref().map_or(0, |trees| {
            trees.run_pending_tasks();
            trees.entry_count()
        })
    }
}

impl std::fmt::Debug for PathFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathFinder")
            .field("cached_trees", &self.trees.as_ref().map(|t| t.entry_count()))
            .finish()
    }
}
