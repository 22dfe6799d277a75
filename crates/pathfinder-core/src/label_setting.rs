//! Label-setting shortest paths for non-negative weights.
//!
//! The engine expands a FIFO frontier starting at the source. Each expansion
//! reads the dequeued vertex's matrix row, orders the outgoing edges by
//! `(weight, destination)` with a min-heap and relaxes them in that order.
//!
//! # Relaxation rules
//!
//! - A destination that has not been expanded yet accepts any cost that is not
//!   worse than its current one, so ties overwrite the recorded parent. Among
//!   several equal-cost routes the one relaxed last wins.
//! - A destination that has already been expanded only accepts a strictly
//!   better cost, and is then re-opened so its own edges see the improvement.
//!
//! Positive weights bound the number of re-openings, and the run ends with
//! every reached vertex holding its true minimum cost.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use tracing::{debug, trace};

use crate::dense::DenseGraph;
use crate::error::{check_vertex, Error, Result};
use crate::path::ShortestPath;
use crate::{Vertex, Weight};

/// Shortest path engine for graphs whose weights are all non-negative.
///
/// The engine borrows its graph, which therefore cannot change while the
/// engine exists.
#[derive(Debug, Clone, Copy)]
pub struct LabelSetting<'g> {
    graph: &'g DenseGraph,
}

/// Per-query tables, dropped when the query returns.
struct Labels {
    cost: Vec<Option<Weight>>,
    parent: Vec<Option<(Vertex, Weight)>>,
    unvisited: Vec<bool>,
}

impl Labels {
    fn new(vertex_count: usize, source: Vertex) -> Self {
        let mut cost = vec![None; vertex_count];
        cost[source] = Some(0);
        Self {
            cost,
            parent: vec![None; vertex_count],
            unvisited: vec![true; vertex_count],
        }
    }

    /// Whether `cost` should replace the label of `v`.
    fn accepts(&self, v: Vertex, cost: Weight) -> bool {
        if self.unvisited[v] {
            self.cost[v].is_none_or(|current| current >= cost)
        } else {
            self.cost[v].is_some_and(|current| cost < current)
        }
    }

    fn record(&mut self, u: Vertex, v: Vertex, weight: Weight, cost: Weight) {
        self.cost[v] = Some(cost);
        self.parent[v] = Some((u, weight));
        self.unvisited[v] = true;
    }
}

impl<'g> LabelSetting<'g> {
    /// Create an engine over `graph`.
    #[must_use]
    pub fn new(graph: &'g DenseGraph) -> Self {
        Self { graph }
    }

    /// Find the cheapest path from `source` to `target`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidVertex`] if `source` or `target` is out of range
    /// - [`Error::InvalidInput`] if an expanded vertex has a negative edge
    /// - [`Error::PathNotFound`] if `target` is unreachable from `source`
    /// - [`Error::AssertionFailure`] if the parent table is inconsistent
    pub fn find_shortest_path(&self, source: Vertex, target: Vertex) -> Result<ShortestPath> {
        let vertex_count = self.graph.vertex_count();
        check_vertex(source, vertex_count)?;
        check_vertex(target, vertex_count)?;

        if source == target {
            return Ok(ShortestPath::single(source));
        }

        debug!(source, target, vertex_count, "label-setting query started");

        let mut labels = Labels::new(vertex_count, source);
        let mut queue = VecDeque::from([source]);
        let mut expansions = 0_usize;

        while let Some(u) = queue.pop_front() {
            if !labels.unvisited[u] {
                continue;
            }
            labels.unvisited[u] = false;
            expansions += 1;

            let base = labels.cost[u].ok_or_else(|| {
                Error::AssertionFailure(format!("vertex {u} was queued without a cost"))
            })?;

            let mut candidates = self.candidates(u)?;
            while let Some(Reverse((weight, v))) = candidates.pop() {
                let cost = base.saturating_add(weight);
                if !labels.accepts(v, cost) {
                    continue;
                }
                trace!(from = u, to = v, cost, "relaxed");
                labels.record(u, v, weight, cost);
                queue.push_back(v);
            }
        }

        debug!(expansions, "label-setting query finished");

        let cost = labels.cost[target].ok_or(Error::PathNotFound {
            from: source,
            to: target,
        })?;
        reconstruct(&labels.parent, source, target, cost)
    }

    /// Present edges of `u`, cheapest first, ties by destination index.
    fn candidates(&self, u: Vertex) -> Result<BinaryHeap<Reverse<(Weight, Vertex)>>> {
        let mut heap = BinaryHeap::new();
        for (v, &weight) in self.graph.row(u)?.iter().enumerate() {
            match weight.cmp(&0) {
                Ordering::Less => return Err(Error::negative_weight(u, v, weight)),
                Ordering::Equal => {}
                Ordering::Greater => heap.push(Reverse((weight, v))),
            }
        }
        Ok(heap)
    }
}

/// Walk the parent table back from `target` to `source`.
fn reconstruct(
    parent: &[Option<(Vertex, Weight)>],
    source: Vertex,
    target: Vertex,
    cost: Weight,
) -> Result<ShortestPath> {
    let mut vertices = vec![target];
    let mut total: Weight = 0;
    let mut current = target;

    while current != source {
        if vertices.len() > parent.len() {
            return Err(Error::AssertionFailure(format!(
                "parent chain from vertex {target} does not reach vertex {source}"
            )));
        }
        let (previous, weight) = parent[current].ok_or_else(|| {
            Error::AssertionFailure(format!("vertex {current} has a cost but no parent"))
        })?;
        total = total.saturating_add(weight);
        vertices.push(previous);
        current = previous;
    }

    if total != cost {
        return Err(Error::AssertionFailure(format!(
            "parent chain of vertex {target} sums to {total}, expected {cost}"
        )));
    }

    vertices.reverse();
    ShortestPath::new(vertices, cost)
        .ok_or_else(|| Error::AssertionFailure("reconstructed an empty path".to_string()))
}
