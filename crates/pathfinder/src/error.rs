//! Error types for pathfinder CLI operations.

use std::io;
use std::path::PathBuf;

use pathfinder_core::Vertex;
use thiserror::Error;

/// The error type for pathfinder CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The graph file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The graph file is malformed or describes an invalid graph.
    #[error("invalid graph file")]
    Parse(#[from] ParseError),

    /// The shortest path query failed.
    #[error(transparent)]
    Engine(#[from] pathfinder_core::Error),

    /// The result could not be written.
    #[error("failed to write output")]
    Output(#[from] io::Error),

    /// The result could not be serialized.
    #[error("failed to serialize output")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` if this error signals a bug rather than bad input.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Engine(e) if e.is_internal_error())
    }
}

/// A problem in the text graph format, located by 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input ended before a header line.
    #[error("missing {field} on line {line}")]
    MissingHeader {
        /// Which header value is missing.
        field: &'static str,
        /// Line where it was expected.
        line: usize,
    },

    /// A header line is not a single non-negative integer.
    #[error("line {line}: {field} must be a non-negative integer, got '{value}'")]
    InvalidHeader {
        /// Line of the header.
        line: usize,
        /// Which header value is malformed.
        field: &'static str,
        /// The offending text.
        value: String,
    },

    /// The vertex count is too large to build the graph.
    #[error("line {line}: vertex count {count} exceeds the supported maximum of {limit}")]
    TooManyVertices {
        /// Line of the vertex count.
        line: usize,
        /// The requested vertex count.
        count: usize,
        /// Largest count accepted here.
        limit: usize,
    },

    /// An edge line does not have exactly three fields.
    #[error("line {line}: expected 'from to weight', got {count} fields")]
    FieldCount {
        /// Line of the edge.
        line: usize,
        /// Number of whitespace-separated fields found.
        count: usize,
    },

    /// An edge field is not an integer of the right kind.
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        /// Line of the edge.
        line: usize,
        /// Which field is malformed.
        field: &'static str,
        /// The offending text.
        value: String,
    },

    /// The graph rejected an edge.
    #[error("line {line}: edge {from} -> {to} rejected")]
    Edge {
        /// Line of the edge.
        line: usize,
        /// Source vertex of the edge.
        from: Vertex,
        /// Destination vertex of the edge.
        to: Vertex,
        /// Why the edge was rejected.
        #[source]
        cause: pathfinder_core::Error,
    },
}

impl ParseError {
    /// Line number the error points at.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::MissingHeader { line, .. }
            | Self::InvalidHeader { line, .. }
            | Self::TooManyVertices { line, .. }
            | Self::FieldCount { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::Edge { line, .. } => *line,
        }
    }
}

/// A specialized Result type for pathfinder operations.
pub type Result<T> = std::result::Result<T, Error>;
