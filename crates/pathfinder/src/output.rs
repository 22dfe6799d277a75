//! Output formatting for query results.
//!
//! Results are printed either as human-readable text or as JSON for
//! programmatic use. Diagnostics never go to stdout.

use std::io::{self, Write};

use pathfinder_core::ShortestPath;
use serde::Serialize;

use crate::error::Result;
use crate::query::Algorithm;

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// A successful query result, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Algorithm that produced the path.
    pub algorithm: Algorithm,
    /// The path and its cost.
    #[serde(flatten)]
    pub path: ShortestPath,
}

/// Print a report to stdout in the specified format
///
/// # Errors
///
/// Returns an error if stdout cannot be written or JSON serialization fails.
pub fn print_report(report: &Report, mode: OutputMode) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, report, mode)
}

/// Write a report in the specified format.
///
/// Text mode prints two lines:
///
/// ```text
/// shortest path: 0 -> 2 -> 1 -> 3
/// total cost: 3
/// ```
///
/// # Errors
///
/// Returns an error if the writer fails or JSON serialization fails.
pub fn write_report<W: Write>(w: &mut W, report: &Report, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Text => {
            writeln!(w, "shortest path: {}", report.path)?;
            writeln!(w, "total cost: {}", report.path.cost())?;
        }
        OutputMode::Json => {
            serde_json::to_writer(&mut *w, report)?;
            writeln!(w)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report {
            algorithm: Algorithm::LabelSetting,
            path: ShortestPath::new(vec![0, 2, 1, 3], 3).unwrap(),
        }
    }

    fn render(report: &Report, mode: OutputMode) -> String {
        let mut buffer = Vec::new();
        write_report(&mut buffer, report, mode).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn text_output_has_path_then_cost() {
        assert_eq!(
            render(&report(), OutputMode::Text),
            "shortest path: 0 -> 2 -> 1 -> 3\ntotal cost: 3\n"
        );
    }

    #[test]
    fn json_output_flattens_the_path() {
        let json: serde_json::Value =
            serde_json::from_str(&render(&report(), OutputMode::Json)).unwrap();

        assert_eq!(json["algorithm"], "label-setting");
        assert_eq!(json["path"], serde_json::json!([0, 2, 1, 3]));
        assert_eq!(json["cost"], 3);
    }

    #[test]
    fn single_vertex_path_renders_without_arrows() {
        let report = Report {
            algorithm: Algorithm::LabelCorrecting,
            path: ShortestPath::single(4),
        };

        assert_eq!(
            render(&report, OutputMode::Text),
            "shortest path: 4\ntotal cost: 0\n"
        );
    }
}
