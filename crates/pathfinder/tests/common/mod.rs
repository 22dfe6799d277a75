//! Common test utilities shared across integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to the pathfinder binary built by cargo for this test run
pub fn pathfinder_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pathfinder"))
}

/// Run the pathfinder binary with the given arguments
pub fn run_pathfinder(args: &[&str]) -> Output {
    Command::new(pathfinder_binary())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute pathfinder binary")
}

/// Write a graph file into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write graph file");
    path
}

/// Stdout of a finished process as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished process as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
