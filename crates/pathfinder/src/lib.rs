//! Pathfinder - shortest paths in weighted directed graphs from the command line.
//!
//! This crate wraps the engines of [`pathfinder_core`] with a text input
//! format, algorithm selection and result formatting. It contains no
//! algorithmic code of its own.

#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod input;
pub mod output;
pub mod query;

pub use error::{Error, ParseError, Result};
