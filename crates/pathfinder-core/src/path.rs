//! The result of a shortest path query.

use std::fmt;

use serde::Serialize;

use crate::{Vertex, Weight};

/// An ordered vertex sequence from source to target with its total cost.
///
/// Both engines return this type. The sequence is never empty: a query whose
/// source equals its target yields a single vertex with cost 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    #[serde(rename = "path")]
    vertices: Vec<Vertex>,
    cost: Weight,
}

impl ShortestPath {
    /// Create a path, returning `None` if `vertices` is empty.
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, cost: Weight) -> Option<Self> {
        if vertices.is_empty() {
            return None;
        }
        Some(Self { vertices, cost })
    }

    /// Create the trivial path that stays at `vertex`.
    #[must_use]
    pub fn single(vertex: Vertex) -> Self {
        Self {
            vertices: vec![vertex],
            cost: 0,
        }
    }

    /// Vertices from source to target, both inclusive.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Sum of the edge weights along the path.
    #[must_use]
    pub fn cost(&self) -> Weight {
        self.cost
    }

    /// First vertex of the path.
    #[must_use]
    pub fn source(&self) -> Vertex {
        self.vertices[0]
    }

    /// Last vertex of the path.
    #[must_use]
    pub fn target(&self) -> Vertex {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }
}

/// Renders the vertices as `v0 -> v1 -> ... -> vn`.
impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{vertex}")?;
        }
        Ok(())
    }
}
