//! Shared helpers for CLI end-to-end tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Path to the shadesmith binary
pub fn shadesmith_bin() -> &'static str {
    env!("CARGO_BIN_EXE_shadesmith")
}

/// Creates a Command with an isolated config directory.
/// Pass the same directory to share config between commands in one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(shadesmith_bin());
    cmd.env("SHADESMITH_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs `args` against a fresh, empty config directory.
pub fn run_isolated(args: &[&str]) -> Output {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, temp_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Stdout as text
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as text
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parses stdout as JSON
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout(output)).expect("Should parse JSON output")
}
