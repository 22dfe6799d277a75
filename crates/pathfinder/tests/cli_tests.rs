//! Integration tests for the pathfinder CLI.
//!
//! These tests run the built binary against graph files in a temporary
//! directory and check stdout, stderr and the exit status.

use rstest::{fixture, rstest};
use tempfile::TempDir;

mod common;
use common::{run_pathfinder, stderr, stdout, write_graph};

const DETOUR: &str = "4\n0\n3\n0 1 4\n0 2 1\n2 1 1\n1 3 1\n";
const NEGATIVE_EDGE: &str = "3\n0\n2\n0 1 5\n1 2 -3\n0 2 10\n";
const NEGATIVE_CYCLE: &str = "3\n0\n2\n0 1 1\n1 2 -3\n2 0 1\n";
const UNREACHABLE: &str = "3\n0\n2\n0 1 1\n2 0 1\n";

// ============================================================================
// Test Fixtures
// ============================================================================

/// Provides a fresh temporary directory for each test
#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Run the binary on a graph file written from `contents`
fn run_on(dir: &TempDir, contents: &str, args: &[&str]) -> std::process::Output {
    let file = write_graph(dir.path(), "graph.txt", contents);
    let file = file.to_str().expect("temp path is UTF-8");
    let mut argv = args.to_vec();
    argv.push(file);
    run_pathfinder(&argv)
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let output = run_pathfinder(&["--help"]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--algorithm"));
    assert!(stdout.contains("label-setting"));
}

#[test]
fn test_cli_version() {
    let output = run_pathfinder(&["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_requires_algorithm_and_file() {
    let output = run_pathfinder(&[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("--algorithm"));
}

// ============================================================================
// Successful Queries
// ============================================================================

#[rstest]
#[case::label_setting(DETOUR, "label-setting", "0 -> 2 -> 1 -> 3", 3)]
#[case::dijkstra_alias(DETOUR, "dijkstra", "0 -> 2 -> 1 -> 3", 3)]
#[case::label_correcting_positive(DETOUR, "label-correcting", "0 -> 2 -> 1 -> 3", 3)]
#[case::label_correcting_negative(NEGATIVE_EDGE, "label-correcting", "0 -> 1 -> 2", 2)]
#[case::bellman_ford_alias(NEGATIVE_EDGE, "bellman-ford", "0 -> 1 -> 2", 2)]
fn test_prints_path_and_cost(
    temp_dir: TempDir,
    #[case] graph: &str,
    #[case] algorithm: &str,
    #[case] path: &str,
    #[case] cost: i64,
) {
    let output = run_on(&temp_dir, graph, &["--algorithm", algorithm]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!("shortest path: {path}\ntotal cost: {cost}\n")
    );
}

#[rstest]
fn test_source_equals_target(temp_dir: TempDir) {
    let output = run_on(&temp_dir, "3\n1\n1\n0 1 2\n1 2 2\n", &["-a", "label-setting"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "shortest path: 1\ntotal cost: 0\n");
}

#[rstest]
fn test_json_output(temp_dir: TempDir) {
    let output = run_on(&temp_dir, NEGATIVE_EDGE, &["-a", "label-correcting", "--json"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["algorithm"], "label-correcting");
    assert_eq!(json["path"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["cost"], 2);
}

#[rstest]
fn test_zero_weight_edge_warns_in_label_setting_mode(temp_dir: TempDir) {
    let output = run_on(&temp_dir, "3\n0\n2\n0 1 0\n0 2 7\n", &["-a", "label-setting"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "shortest path: 0 -> 2\ntotal cost: 7\n");
    assert!(stderr(&output).contains("zero-weight edge is treated as absent"));
}

#[rstest]
fn test_no_cycle_check_restores_legacy_behavior(temp_dir: TempDir) {
    let output = run_on(
        &temp_dir,
        NEGATIVE_CYCLE,
        &["-a", "label-correcting", "--no-cycle-check"],
    );

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("shortest path: 0 -> "));
}

// ============================================================================
// Failures
// ============================================================================

#[rstest]
#[case::negative_weight_for_label_setting(NEGATIVE_EDGE, "label-setting", "negative weight")]
#[case::negative_cycle(NEGATIVE_CYCLE, "label-correcting", "negative cycle")]
#[case::unreachable_label_setting(UNREACHABLE, "label-setting", "no path from vertex 0 to vertex 2")]
#[case::unreachable_label_correcting(UNREACHABLE, "label-correcting", "no path from vertex 0 to vertex 2")]
#[case::invalid_target("2\n0\n5\n0 1 1\n", "label-correcting", "invalid vertex 5")]
#[case::invalid_edge_vertex("2\n0\n1\n0 7 1\n", "label-setting", "invalid vertex 7")]
#[case::malformed_edge("2\n0\n1\n0 1\n", "label-correcting", "line 4")]
#[case::malformed_header("two\n0\n1\n", "label-setting", "vertex count")]
#[case::overflowing_vertex_count_label_setting(
    "18446744073709551615\n0\n0\n",
    "label-setting",
    "line 1: vertex count 18446744073709551615 exceeds"
)]
#[case::overflowing_vertex_count_label_correcting(
    "18446744073709551615\n0\n0\n",
    "label-correcting",
    "line 1: vertex count 18446744073709551615 exceeds"
)]
#[case::huge_vertex_count(
    "4000000000\n0\n1\n",
    "label-correcting",
    "vertex count 4000000000 exceeds"
)]
#[case::too_many_vertices_for_matrix("5000\n0\n1\n", "label-setting", "vertex count 5000 exceeds")]
fn test_failures_exit_nonzero_with_diagnostic(
    temp_dir: TempDir,
    #[case] graph: &str,
    #[case] algorithm: &str,
    #[case] message: &str,
) {
    let output = run_on(&temp_dir, graph, &["-a", algorithm]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let stderr = stderr(&output);
    assert!(stderr.contains("error"), "stderr: {stderr}");
    assert!(stderr.contains(message), "stderr: {stderr}");
}

#[rstest]
fn test_missing_file(temp_dir: TempDir) {
    let missing = temp_dir.path().join("nope.txt");

    let output = run_pathfinder(&["-a", "label-setting", missing.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = stderr(&output);
    assert!(stderr.contains("failed to read"));
    assert!(stderr.contains("nope.txt"));
}

#[rstest]
fn test_unknown_algorithm(temp_dir: TempDir) {
    let output = run_on(&temp_dir, DETOUR, &["-a", "floyd-warshall"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("floyd-warshall"));
}
