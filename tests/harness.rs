//! Test harness for dirwalk integration tests

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;

pub use dirwalk::test_utils::{TestTree, collect_entries};

/// Run the binary in `dir` with color disabled.
pub fn run_dirwalk(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::cargo_bin("dirwalk")
        .expect("binary should be built")
        .args(args)
        .arg("--color=never")
        .current_dir(dir)
        .output()
        .expect("Failed to run dirwalk");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Output lines after the "Walking through:" banner.
pub fn tree_lines(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|l| !l.starts_with("Walking through: "))
        .collect()
}
