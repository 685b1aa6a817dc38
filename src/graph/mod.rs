//! Directed, weighted dependency graph over task names.
//!
//! Vertices are task names; an edge `dependency → dependent` carries the
//! dependent task's workload in minutes as its weight. The adjacency map
//! is keyed by name, but vertex insertion order is kept as an explicit
//! parallel sequence so traversal results are reproducible across runs
//! (hash-map iteration order is not).
//!
//! Duplicate edges for the same ordered pair are dropped, first write
//! wins. An edge naming a missing endpoint is skipped with a debug log
//! rather than raised as an error.

mod analysis;

pub use analysis::{shortest_distances, topological_order};

use std::collections::HashMap;

use tracing::debug;

/// Adjacency-list dependency graph.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Vertex name → outgoing `(target, weight)` pairs, insertion order.
    adjacency: HashMap<String, Vec<(String, i64)>>,
    /// Vertex names in insertion order.
    order: Vec<String>,
}

impl DependencyGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex. No-op if the name is already present.
    pub fn add_vertex(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.adjacency.contains_key(&name) {
            self.adjacency.insert(name.clone(), Vec::new());
            self.order.push(name);
        }
    }

    /// Adds a directed edge `from → to` with the given weight.
    ///
    /// Skipped (with a debug log) if either endpoint is missing, or if an
    /// edge for this ordered pair already exists.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) {
        if !self.adjacency.contains_key(to) {
            debug!(from, to, "edge references a missing vertex, skipping");
            return;
        }
        let Some(neighbors) = self.adjacency.get_mut(from) else {
            debug!(from, to, "edge references a missing vertex, skipping");
            return;
        };
        if neighbors.iter().any(|(target, _)| target == to) {
            debug!(from, to, "duplicate edge, keeping first");
            return;
        }
        neighbors.push((to.to_string(), weight));
    }

    /// Outgoing `(target, weight)` pairs of a vertex, in insertion order.
    ///
    /// Returns an empty slice for unknown vertices.
    pub fn neighbors(&self, vertex: &str) -> &[(String, i64)] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Vertex names in insertion order.
    pub fn vertices(&self) -> &[String] {
        &self.order
    }

    /// Whether a vertex exists.
    pub fn contains(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// A display-ordered view of the adjacency structure.
    ///
    /// Vertices and neighbor lists sorted by name. For rendering only;
    /// traversal always uses insertion order.
    pub fn sorted_adjacency(&self) -> Vec<(String, Vec<(String, i64)>)> {
        let mut view: Vec<(String, Vec<(String, i64)>)> = self
            .adjacency
            .iter()
            .map(|(vertex, neighbors)| {
                let mut sorted = neighbors.clone();
                sorted.sort();
                (vertex.clone(), sorted)
            })
            .collect();
        view.sort_by(|a, b| a.0.cmp(&b.0));
        view
    }
}
