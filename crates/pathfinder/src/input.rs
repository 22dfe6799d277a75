//! Parser for the line-oriented graph file format.
//!
//! ```text
//! 4          vertex count
//! 0          source vertex
//! 3          target vertex
//! 0 1 4      one `from to weight` edge per line
//! 0 2 1
//! ```
//!
//! Blank lines are skipped anywhere in the file. Line numbers in errors count
//! every physical line, blank or not.
//!
//! Parsing produces a [`GraphInput`], which does not depend on the algorithm.
//! It is turned into the representation an engine needs with
//! [`GraphInput::to_dense`] or [`GraphInput::to_adjacency`].
//!
//! The vertex count is capped at [`MAX_VERTICES`], and at
//! [`MAX_DENSE_VERTICES`] for the weight matrix, so a bad header is reported
//! instead of exhausting memory.

use std::path::Path;
use std::str::FromStr;

use pathfinder_core::{AdjacencyGraph, DenseGraph, Vertex, Weight};
use tracing::{debug, warn};

use crate::error::{Error, ParseError, Result};

/// Largest vertex count the parser accepts.
pub const MAX_VERTICES: usize = 1 << 22;

/// Largest vertex count for the `|V| x |V|` weight matrix (128 MiB of cells).
pub const MAX_DENSE_VERTICES: usize = 1 << 12;

/// One edge line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLine {
    /// 1-based line number in the file.
    pub line: usize,
    /// Source vertex.
    pub from: Vertex,
    /// Destination vertex.
    pub to: Vertex,
    /// Edge weight.
    pub weight: Weight,
}

/// A parsed graph file: header values plus the edges in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInput {
    /// Number of vertices.
    pub vertex_count: usize,
    /// 1-based line the vertex count was read from.
    pub vertex_count_line: usize,
    /// Vertex the path starts at.
    pub source: Vertex,
    /// Vertex the path ends at.
    pub target: Vertex,
    /// Edges in the order they appear.
    pub edges: Vec<EdgeLine>,
}

impl GraphInput {
    /// Read and parse a graph file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Parse`]
    /// if its content is malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let input = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            vertices = input.vertex_count,
            edges = input.edges.len(),
            "graph file parsed"
        );
        Ok(input)
    }

    /// Parse the text of a graph file.
    ///
    /// The vertex count must not exceed [`MAX_VERTICES`]. Vertex indices are
    /// not range-checked here; the graph does that when the edges are
    /// inserted.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] locating the first malformed line.
    pub fn parse(text: &str) -> std::result::Result<Self, ParseError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());
        let mut last_line = 0;
        let mut header =
            |field: &'static str| -> std::result::Result<(usize, usize), ParseError> {
                let Some((line, value)) = lines.next() else {
                    return Err(ParseError::MissingHeader {
                        field,
                        line: last_line + 1,
                    });
                };
                last_line = line;
                let parsed = value.parse::<usize>().map_err(|_| ParseError::InvalidHeader {
                    line,
                    field,
                    value: value.to_string(),
                })?;
                Ok((line, parsed))
            };

        let (vertex_count_line, vertex_count) = header("vertex count")?;
        check_vertex_count(vertex_count_line, vertex_count, MAX_VERTICES)?;
        let (_, source) = header("source vertex")?;
        let (_, target) = header("target vertex")?;

        let edges = lines
            .map(|(line, text)| parse_edge(line, text))
            .collect::<std::result::Result<_, _>>()?;

        Ok(Self {
            vertex_count,
            vertex_count_line,
            source,
            target,
            edges,
        })
    }

    /// Build the weight matrix used by the label-setting engine.
    ///
    /// A later edge between the same pair overwrites an earlier one, and a
    /// zero weight leaves the cell empty (the edge is treated as absent).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TooManyVertices`] above [`MAX_DENSE_VERTICES`],
    /// and [`ParseError::Edge`] for a negative weight or an out-of-range
    /// vertex.
    pub fn to_dense(&self) -> std::result::Result<DenseGraph, ParseError> {
        check_vertex_count(self.vertex_count_line, self.vertex_count, MAX_DENSE_VERTICES)?;
        let mut graph = DenseGraph::new(self.vertex_count);
        for edge in &self.edges {
            if edge.weight < 0 {
                return Err(edge.rejected(pathfinder_core::Error::negative_weight(
                    edge.from,
                    edge.to,
                    edge.weight,
                )));
            }
            if let Ok(Some(previous)) = graph.weight(edge.from, edge.to) {
                warn!(
                    line = edge.line,
                    from = edge.from,
                    to = edge.to,
                    previous,
                    "edge overrides an earlier weight"
                );
            }
            if edge.weight == 0 {
                warn!(
                    line = edge.line,
                    from = edge.from,
                    to = edge.to,
                    "zero-weight edge is treated as absent"
                );
            }
            graph
                .set_edge(edge.from, edge.to, edge.weight)
                .map_err(|cause| edge.rejected(cause))?;
        }
        Ok(graph)
    }

    /// Build the adjacency list used by the label-correcting engine.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Edge`] for an out-of-range vertex.
    pub fn to_adjacency(&self) -> std::result::Result<AdjacencyGraph, ParseError> {
        let mut graph = AdjacencyGraph::new(self.vertex_count);
        for edge in &self.edges {
            graph
                .add_edge(edge.from, edge.to, edge.weight)
                .map_err(|cause| edge.rejected(cause))?;
        }
        Ok(graph)
    }
}

impl FromStr for GraphInput {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl EdgeLine {
    fn rejected(&self, cause: pathfinder_core::Error) -> ParseError {
        ParseError::Edge {
            line: self.line,
            from: self.from,
            to: self.to,
            cause,
        }
    }
}

fn check_vertex_count(
    line: usize,
    count: usize,
    limit: usize,
) -> std::result::Result<(), ParseError> {
    if count > limit {
        return Err(ParseError::TooManyVertices { line, count, limit });
    }
    Ok(())
}

fn parse_edge(line: usize, text: &str) -> std::result::Result<EdgeLine, ParseError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [from, to, weight] = fields[..] else {
        return Err(ParseError::FieldCount {
            line,
            count: fields.len(),
        });
    };

    Ok(EdgeLine {
        line,
        from: parse_field(line, "source vertex", from)?,
        to: parse_field(line, "destination vertex", to)?,
        weight: parse_field(line, "weight", weight)?,
    })
}

fn parse_field<T: FromStr>(
    line: usize,
    field: &'static str,
    value: &str,
) -> std::result::Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}
