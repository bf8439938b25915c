//! Directed weighted graph with a fixed vertex set.

/// Dense vertex index in `[0, vertex_count)`.
pub type VertexId = usize;

/// Sequential edge index, assigned in insertion order.
pub type EdgeId = usize;

/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Append-only directed graph.
///
/// The vertex count is fixed at construction. Edges are appended and never
/// removed; each vertex keeps the ids of its outgoing edges.
#[derive(Debug, Clone, Default)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Append an edge and return its id.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of range or the weight is negative.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        assert!(
            edge.from < self.vertex_count() && edge.to < self.vertex_count(),
            "edge endpoint out of range"
        );
        assert!(edge.weight >= 0.0, "edge weight must be non-negative");
        let id = self.edges.len();
        self.edges.push(edge);
        self.incidence[edge.from].push(id);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// Ids of the edges leaving `vertex`.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence[vertex]
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate()
    }
}
