//! Shortest path engines for weighted directed graphs.
//!
//! Two independent engines answer the same question (cheapest route from a
//! source vertex to a target vertex) under different weight regimes:
//!
//! - [`LabelSetting`] runs over a [`DenseGraph`] and requires non-negative
//!   weights.
//! - [`LabelCorrecting`] runs over an [`AdjacencyGraph`] and accepts signed
//!   weights, reporting [`Error::NegativeCycle`] when the cost is unbounded.
//!
//! # Example
//!
//! ```
//! use pathfinder_core::{DenseGraph, LabelSetting};
//!
//! let mut graph = DenseGraph::new(4);
//! graph.set_edge(0, 1, 4)?;
//! graph.set_edge(0, 2, 1)?;
//! graph.set_edge(2, 1, 1)?;
//! graph.set_edge(1, 3, 1)?;
//!
//! let path = LabelSetting::new(&graph).find_shortest_path(0, 3)?;
//! assert_eq!(path.vertices(), &[0, 2, 1, 3]);
//! assert_eq!(path.cost(), 3);
//! # Ok::<(), pathfinder_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod adjacency;
pub mod dense;
pub mod error;
pub mod label_correcting;
pub mod label_setting;
pub mod path;

pub use adjacency::{AdjacencyGraph, Edge};
pub use dense::DenseGraph;
pub use error::{Error, Result};
pub use label_correcting::LabelCorrecting;
pub use label_setting::LabelSetting;
pub use path::ShortestPath;

/// Index of a vertex, in `[0, vertex_count)`.
pub type Vertex = usize;

/// Integer edge weight and path cost.
pub type Weight = i64;
