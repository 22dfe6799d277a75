//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for pathfinder using clap's
//! derive API. Flags are resolved into [`Settings`] before any file is read.
//!
//! # Example
//!
//! ```bash
//! pathfinder --algorithm label-setting graph.txt
//! pathfinder -a bellman-ford --json graph.txt
//! RUST_LOG=pathfinder_core=trace pathfinder -a label-correcting graph.txt
//! ```

mod types;

pub use types::AlgorithmArg;

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use crate::error::Result;
use crate::input::GraphInput;
use crate::output::{print_report, OutputMode, Report};
use crate::query::{Algorithm, Query};

/// Pathfinder - shortest paths in weighted directed graphs
///
/// Reads a graph file (vertex count, source, target, then one
/// `from to weight` edge per line) and prints the cheapest path from the
/// source to the target with its total cost.
#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shortest path algorithm to run
    #[arg(short, long, value_enum)]
    pub algorithm: AlgorithmArg,

    /// Path to the graph file
    pub file: PathBuf,

    /// Skip negative-cycle verification (label-correcting only)
    ///
    /// Without the check a reachable negative cycle yields a finite but
    /// meaningless cost instead of an error.
    #[arg(long)]
    pub no_cycle_check: bool,

    /// Output in JSON format for programmatic use
    #[arg(long)]
    pub json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Graph file to read.
    pub file: PathBuf,
    /// Engine to run.
    pub algorithm: Algorithm,
    /// Whether the label-correcting engine verifies negative cycles.
    pub cycle_check: bool,
    /// How to print the result.
    pub output: OutputMode,
}

impl Settings {
    /// Read the graph file, run the selected engine and return the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, the graph is
    /// invalid for the selected algorithm, or the engine fails.
    pub fn run(&self) -> Result<Report> {
        let input = GraphInput::from_path(&self.file)?;
        let query = Query::prepare(&input, self.algorithm, self.cycle_check)?;
        let path = query.run()?;
        Ok(Report {
            algorithm: self.algorithm,
            path,
        })
    }
}

// ============================================================================
// CLI Implementation
// ============================================================================

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns clap's error for unknown flags, missing arguments or an
    /// unknown algorithm name.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Default log filter for the requested verbosity.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Resolve flags into run settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        let algorithm = Algorithm::from(self.algorithm);
        if self.no_cycle_check && algorithm == Algorithm::LabelSetting {
            warn!("--no-cycle-check has no effect on the label-setting algorithm");
        }
        Settings {
            file: self.file.clone(),
            algorithm,
            cycle_check: !self.no_cycle_check,
            output: if self.json {
                OutputMode::Json
            } else {
                OutputMode::Text
            },
        }
    }

    /// Execute the query and print its result to stdout.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Settings::run`] or from writing the output.
    pub fn execute(&self) -> Result<()> {
        let settings = self.settings();
        let report = settings.run()?;
        print_report(&report, settings.output)
    }
}
