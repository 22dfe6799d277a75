//! Dense weight-matrix graph used by the label-setting engine.

use crate::error::{check_vertex, Result};
use crate::{Vertex, Weight};

/// A directed graph stored as a `|V| x |V|` weight matrix.
///
/// The matrix is zero-filled at construction and a cell holding `0` means
/// "no edge". A zero-weight edge therefore cannot be represented: storing
/// weight `0` is the same as never adding the edge. The vertex count is fixed
/// for the lifetime of the graph.
///
/// Weights are not validated here. The label-setting engine rejects negative
/// weights when it reaches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGraph {
    matrix: Vec<Vec<Weight>>,
}

impl DenseGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            matrix: vec![vec![0; vertex_count]; vertex_count],
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    /// Number of non-zero cells, i.e. edges that are present.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|&&w| w != 0).count())
            .sum()
    }

    /// Store `weight` in the `u -> v` cell, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `u` or
    /// `v` is out of range. The graph is left unchanged.
    pub fn set_edge(&mut self, u: Vertex, v: Vertex, weight: Weight) -> Result<()> {
        check_vertex(u, self.vertex_count())?;
        check_vertex(v, self.vertex_count())?;
        self.matrix[u][v] = weight;
        Ok(())
    }

    /// The full weight row of `u`: entry `v` is the weight of `u -> v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `u` is
    /// out of range.
    pub fn row(&self, u: Vertex) -> Result<&[Weight]> {
        check_vertex(u, self.vertex_count())?;
        Ok(&self.matrix[u])
    }

    /// Weight of the `u -> v` edge, or `None` when the cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `u` or
    /// `v` is out of range.
    pub fn weight(&self, u: Vertex, v: Vertex) -> Result<Option<Weight>> {
        check_vertex(v, self.vertex_count())?;
        let weight = self.row(u)?[v];
        Ok((weight != 0).then_some(weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn new_graph_is_zero_filled() {
        let graph = DenseGraph::new(3);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        for u in 0..3 {
            assert_eq!(graph.row(u).unwrap(), &[0, 0, 0]);
        }
    }

    #[test]
    fn set_edge_overwrites_cell() {
        let mut graph = DenseGraph::new(2);
        graph.set_edge(0, 1, 7).unwrap();
        graph.set_edge(0, 1, 3).unwrap();

        assert_eq!(graph.row(0).unwrap(), &[0, 3]);
        assert_eq!(graph.weight(0, 1).unwrap(), Some(3));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn zero_weight_is_indistinguishable_from_absence() {
        let mut graph = DenseGraph::new(2);
        graph.set_edge(0, 1, 0).unwrap();

        assert_eq!(graph.weight(0, 1).unwrap(), None);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn out_of_range_vertices_are_rejected() {
        let mut graph = DenseGraph::new(2);

        assert_eq!(graph.set_edge(2, 0, 1), Err(Error::invalid_vertex(2, 2)));
        assert_eq!(graph.set_edge(0, 5, 1), Err(Error::invalid_vertex(5, 2)));
        assert_eq!(graph.row(2), Err(Error::invalid_vertex(2, 2)));
        assert_eq!(graph.weight(1, 9), Err(Error::invalid_vertex(9, 2)));
        assert_eq!(graph, DenseGraph::new(2));
    }
}
