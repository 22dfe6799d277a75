//! Error types for shortest path operations.
//!
//! Every failure is deterministic and input-dependent, so nothing here is
//! retryable. Errors fall into two groups:
//!
//! - Input problems (caller can fix): invalid vertices, weights the selected
//!   engine cannot handle, unreachable targets, negative cycles
//! - Internal problems: an engine invariant was breached

use crate::{Vertex, Weight};
use thiserror::Error;

/// The error type for graph construction and shortest path queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A vertex index outside `[0, vertex_count)` was referenced.
    #[error("invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex {
        /// The offending index.
        vertex: Vertex,
        /// Vertex count of the graph at the time of the call.
        vertex_count: usize,
    },

    /// An edge weight is not acceptable for the selected engine.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The target cannot be reached from the source.
    #[error("no path from vertex {from} to vertex {to}")]
    PathNotFound {
        /// Source vertex of the query.
        from: Vertex,
        /// Target vertex of the query.
        to: Vertex,
    },

    /// A negative-weight cycle is reachable from the source.
    #[error("negative cycle detected: path cost is unbounded")]
    NegativeCycle,

    /// An engine invariant was violated.
    #[error("assertion failed: {0}")]
    AssertionFailure(String),
}

impl Error {
    /// Build an [`Error::InvalidVertex`] for `vertex` in a graph of `vertex_count` vertices.
    #[must_use]
    pub fn invalid_vertex(vertex: Vertex, vertex_count: usize) -> Self {
        Self::InvalidVertex {
            vertex,
            vertex_count,
        }
    }

    /// Build the [`Error::InvalidInput`] raised for a negative edge weight.
    #[must_use]
    pub fn negative_weight(from: Vertex, to: Vertex, weight: Weight) -> Self {
        Self::InvalidInput(format!(
            "edge {from} -> {to} has negative weight {weight}; \
             the label-setting engine requires non-negative weights"
        ))
    }

    /// Returns `true` if this error signals a bug in an engine.
    #[must_use]
    pub fn is_internal_error(&self) -> bool {
        matches!(self, Self::AssertionFailure(_))
    }
}

/// A specialized Result type for pathfinder-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Check that `vertex` is a valid index for a graph with `vertex_count` vertices.
pub(crate) fn check_vertex(vertex: Vertex, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(Error::invalid_vertex(vertex, vertex_count))
    }
}
