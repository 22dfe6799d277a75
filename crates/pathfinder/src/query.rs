//! Algorithm selection and query execution.
//!
//! The two engines take different graph representations, so a query is a
//! tagged value holding the graph its engine needs rather than a trait object.

use std::fmt;

use pathfinder_core::{
    AdjacencyGraph, DenseGraph, LabelCorrecting, LabelSetting, ShortestPath, Vertex,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::input::GraphInput;

/// The shortest path algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Frontier expansion for non-negative weights (Dijkstra family)
    LabelSetting,
    /// Bounded-round relaxation for signed weights (Bellman-Ford family)
    LabelCorrecting,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LabelSetting => write!(f, "label-setting"),
            Self::LabelCorrecting => write!(f, "label-correcting"),
        }
    }
}

/// A ready-to-run query: the graph in the form its engine expects plus endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Non-negative weights over a weight matrix.
    LabelSetting {
        /// Weight matrix.
        graph: DenseGraph,
        /// Start vertex.
        source: Vertex,
        /// End vertex.
        target: Vertex,
    },
    /// Signed weights over an adjacency list.
    LabelCorrecting {
        /// Adjacency list.
        graph: AdjacencyGraph,
        /// Start vertex.
        source: Vertex,
        /// End vertex.
        target: Vertex,
        /// Run the negative-cycle verification pass.
        cycle_check: bool,
    },
}

impl Query {
    /// Build the graph representation `algorithm` needs from parsed input.
    ///
    /// `cycle_check` only applies to the label-correcting engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`](crate::Error::Parse) if an edge is invalid for
    /// the selected algorithm.
    pub fn prepare(input: &GraphInput, algorithm: Algorithm, cycle_check: bool) -> Result<Self> {
        let query = match algorithm {
            Algorithm::LabelSetting => Self::LabelSetting {
                graph: input.to_dense()?,
                source: input.source,
                target: input.target,
            },
            Algorithm::LabelCorrecting => Self::LabelCorrecting {
                graph: input.to_adjacency()?,
                source: input.source,
                target: input.target,
                cycle_check,
            },
        };
        let edges = match &query {
            Self::LabelSetting { graph, .. } => graph.edge_count(),
            Self::LabelCorrecting { graph, .. } => graph.edge_count(),
        };
        debug!(
            %algorithm,
            vertices = input.vertex_count,
            edges,
            "graph prepared"
        );
        Ok(query)
    }

    /// Which algorithm this query runs.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::LabelSetting { .. } => Algorithm::LabelSetting,
            Self::LabelCorrecting { .. } => Algorithm::LabelCorrecting,
        }
    }

    /// Run the query on its engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Engine`](crate::Error::Engine) with the engine's
    /// failure (invalid endpoints, no path, negative cycle, ...).
    pub fn run(&self) -> Result<ShortestPath> {
        let path = match self {
            Self::LabelSetting {
                graph,
                source,
                target,
            } => LabelSetting::new(graph).find_shortest_path(*source, *target)?,
            Self::LabelCorrecting {
                graph,
                source,
                target,
                cycle_check,
            } => LabelCorrecting::new(graph)
                .with_cycle_check(*cycle_check)
                .find_shortest_path(*source, *target)?,
        };
        info!(
            algorithm = %self.algorithm(),
            source = path.source(),
            target = path.target(),
            hops = path.hops(),
            cost = path.cost(),
            "shortest path found"
        );
        Ok(path)
    }
}
