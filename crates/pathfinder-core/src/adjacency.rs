//! Adjacency-list graph used by the label-correcting engine.

use crate::error::{check_vertex, Result};
use crate::{Vertex, Weight};

/// An outgoing edge stored in its source vertex's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Destination vertex.
    pub to: Vertex,
    /// Signed edge weight.
    pub weight: Weight,
}

/// A directed graph stored as one edge list per vertex.
///
/// Edges only accumulate: there is no removal or weight update, and parallel
/// edges are kept side by side in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    edges: Vec<Vec<Edge>>,
}

impl AdjacencyGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); vertex_count],
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of edges across all vertices.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Append a vertex with no outgoing edges and return its index.
    pub fn add_vertex(&mut self) -> Vertex {
        self.edges.push(Vec::new());
        self.edges.len() - 1
    }

    /// Append the edge `u -> v` with the given weight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `u` or
    /// `v` is not below the current vertex count. The graph is left unchanged.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, weight: Weight) -> Result<()> {
        check_vertex(u, self.vertex_count())?;
        check_vertex(v, self.vertex_count())?;
        self.edges[u].push(Edge { to: v, weight });
        Ok(())
    }

    /// Outgoing edges of `u` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `u` is
    /// out of range.
    pub fn edges(&self, u: Vertex) -> Result<&[Edge]> {
        check_vertex(u, self.vertex_count())?;
        Ok(&self.edges[u])
    }
}
