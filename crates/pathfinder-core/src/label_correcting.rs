//! Label-correcting shortest paths for signed weights.
//!
//! Relaxation runs for exactly `|V| - 1` rounds. A round is one breadth-first
//! traversal from the source that visits each reachable vertex once and
//! relaxes all of its outgoing edges. Vertices the source cannot reach are
//! never touched.
//!
//! Every round relaxes every reachable edge, so `|V| - 1` rounds settle all
//! costs unless a negative cycle is reachable. The rounds never stop early.
//!
//! After the rounds, an optional verification traversal looks for an edge
//! that still improves a cost and reports [`Error::NegativeCycle`]. It is on
//! by default; without it a negative cycle silently yields a finite but wrong
//! answer.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::adjacency::{AdjacencyGraph, Edge};
use crate::error::{check_vertex, Error, Result};
use crate::path::ShortestPath;
use crate::{Vertex, Weight};

/// Shortest path engine for graphs with signed weights.
#[derive(Debug, Clone, Copy)]
pub struct LabelCorrecting<'g> {
    graph: &'g AdjacencyGraph,
    cycle_check: bool,
}

/// Cost and path tables for one query.
///
/// `path[v]` always describes the route that produced `cost[v]`.
struct Labels {
    cost: Vec<Option<Weight>>,
    path: Vec<Vec<Vertex>>,
}

impl Labels {
    fn new(vertex_count: usize, source: Vertex) -> Self {
        let mut cost = vec![None; vertex_count];
        let mut path = vec![Vec::new(); vertex_count];
        cost[source] = Some(0);
        path[source].push(source);
        Self { cost, path }
    }

    fn improves(&self, u: Vertex, edge: &Edge) -> Option<Weight> {
        let candidate = self.cost[u]?.saturating_add(edge.weight);
        self.cost[edge.to]
            .is_none_or(|current| candidate < current)
            .then_some(candidate)
    }

    /// Relax every edge of `u`, returning how many costs went down.
    fn relax(&mut self, u: Vertex, edges: &[Edge]) -> usize {
        let mut improved = 0;
        for edge in edges {
            if let Some(candidate) = self.improves(u, edge) {
                let mut path = self.path[u].clone();
                path.push(edge.to);
                self.cost[edge.to] = Some(candidate);
                self.path[edge.to] = path;
                improved += 1;
            }
        }
        improved
    }
}

impl<'g> LabelCorrecting<'g> {
    /// Create an engine over `graph` with negative-cycle verification enabled.
    #[must_use]
    pub fn new(graph: &'g AdjacencyGraph) -> Self {
        Self {
            graph,
            cycle_check: true,
        }
    }

    /// Enable or disable the negative-cycle verification pass.
    #[must_use]
    pub fn with_cycle_check(mut self, enabled: bool) -> Self {
        self.cycle_check = enabled;
        self
    }

    /// Find the cheapest path from `source` to `target`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidVertex`] if `source` or `target` is out of range
    /// - [`Error::NegativeCycle`] if verification is enabled and a negative
    ///   cycle is reachable from `source`
    /// - [`Error::PathNotFound`] if `target` is unreachable from `source`
    pub fn find_shortest_path(&self, source: Vertex, target: Vertex) -> Result<ShortestPath> {
        let vertex_count = self.graph.vertex_count();
        check_vertex(source, vertex_count)?;
        check_vertex(target, vertex_count)?;

        let rounds = vertex_count - 1;
        debug!(
            source,
            target,
            rounds,
            cycle_check = self.cycle_check,
            "label-correcting query started"
        );

        let mut labels = Labels::new(vertex_count, source);
        for round in 1..=rounds {
            let mut improved = 0;
            self.traverse(source, |u, edges| improved += labels.relax(u, edges))?;
            trace!(round, improved, "round finished");
        }

        if self.cycle_check {
            let mut witness = None;
            self.traverse(source, |u, edges| {
                if witness.is_none() {
                    witness = edges
                        .iter()
                        .find(|edge| labels.improves(u, edge).is_some())
                        .map(|edge| (u, edge.to));
                }
            })?;
            if let Some((from, to)) = witness {
                debug!(from, to, "edge still relaxes after the final round");
                return Err(Error::NegativeCycle);
            }
        }

        let cost = labels.cost[target].ok_or(Error::PathNotFound {
            from: source,
            to: target,
        })?;
        let vertices = std::mem::take(&mut labels.path[target]);
        ShortestPath::new(vertices, cost).ok_or_else(|| {
            Error::AssertionFailure(format!("vertex {target} has a cost but no recorded path"))
        })
    }

    /// Breadth-first traversal from `source`, calling `visit` once per reached vertex.
    fn traverse<F>(&self, source: Vertex, mut visit: F) -> Result<()>
    where
        F: FnMut(Vertex, &[Edge]),
    {
        let mut visited = vec![false; self.graph.vertex_count()];
        let mut queue = VecDeque::from([source]);

        while let Some(u) = queue.pop_front() {
            if visited[u] {
                continue;
            }
            visited[u] = true;

            let edges = self.graph.edges(u)?;
            visit(u, edges);
            queue.extend(edges.iter().map(|edge| edge.to).filter(|&v| !visited[v]));
        }
        Ok(())
    }
}
