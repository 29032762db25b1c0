//! Integration tests for the dirwalk binary

mod harness;

use assert_cmd::Command;
use predicates::prelude::*;

use harness::{TestTree, run_dirwalk, tree_lines};

#[test]
fn test_basic_tree_output() {
    let tree = TestTree::new();
    tree.add_file("t/a.txt", "a");
    tree.add_dir("t/b");

    let (stdout, _stderr, success) = run_dirwalk(tree.path(), &["t"]);
    assert!(success, "dirwalk should succeed");
    let lines = tree_lines(&stdout);
    assert_eq!(lines[0], "t - a directory containing:");
    assert_eq!(lines.len(), 3, "unexpected output: {}", stdout);
    assert!(lines.contains(&"    a.txt"));
    assert!(lines.contains(&"    b - an empty folder."));
}

#[test]
fn test_banner_shows_canonical_root() {
    let tree = TestTree::new();
    tree.add_file("t/a.txt", "a");
    let canonical = tree.path().join("t").canonicalize().unwrap();

    let (stdout, _stderr, success) = run_dirwalk(tree.path(), &["t"]);
    assert!(success);
    assert_eq!(
        stdout.lines().next().unwrap(),
        format!("Walking through: {}", canonical.display())
    );
}

#[test]
fn test_sorted_strategy() {
    let tree = TestTree::new();
    tree.add_file("t/c.txt", "c");
    tree.add_file("t/a.txt", "a");
    tree.add_dir("t/b");

    let (stdout, _stderr, success) = run_dirwalk(tree.path(), &["t", "3", "--strategy", "sorted"]);
    assert!(success);
    let lines = tree_lines(&stdout);
    // Sorted output indents by separator count: "t" has none, "t/a.txt" one
    assert_eq!(
        lines,
        vec![
            "t - a directory containing:",
            "    a.txt",
            "    b - an empty folder.",
            "    c.txt",
        ]
    );
}

#[test]
fn test_current_dir_alias() {
    let tree = TestTree::new();
    let root = tree.add_dir("project");
    tree.add_file("project/main.rs", "fn main() {}");

    for strategy in ["recursive", "sorted"] {
        let (stdout, stderr, success) = run_dirwalk(&root, &["-s", strategy]);
        assert!(success, "{}: {}", strategy, stderr);
        let lines = tree_lines(&stdout);
        assert_eq!(lines[0], "project a.k.a. . - a directory containing:");
        assert_eq!(lines[1..], ["    main.rs"], "{}", strategy);
    }
}

#[test]
fn test_depth_limit() {
    let tree = TestTree::new();
    tree.add_file("top.txt", "t");
    tree.add_file("level1/mid.txt", "m");
    tree.add_file("level1/level2/deep.txt", "d");

    let (stdout, _stderr, success) = run_dirwalk(tree.path(), &[".", "1"]);
    assert!(success);
    assert!(stdout.contains("top.txt"));
    assert!(stdout.contains("    level1\n"), "level1 should be plain: {}", stdout);
    assert!(!stdout.contains("mid.txt"));
    assert!(!stdout.contains("deep.txt"));
}

#[test]
fn test_depth_zero_single_line() {
    let tree = TestTree::new();
    tree.add_file("t/a.txt", "a");
    tree.add_dir("t/sub");

    for strategy in ["recursive", "sorted"] {
        let (stdout, _stderr, success) = run_dirwalk(tree.path(), &["t", "0", "-s", strategy]);
        assert!(success);
        let lines = tree_lines(&stdout);
        assert_eq!(lines.len(), 1, "{}: {}", strategy, stdout);
        assert_eq!(lines[0], "t", "{}", strategy);
    }
}

#[test]
fn test_json_output() {
    let tree = TestTree::new();
    tree.add_file("t/a.txt", "a");

    let (stdout, _stderr, success) = run_dirwalk(tree.path(), &["t", "--json", "-s", "sorted"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "t");
    assert_eq!(entries[0]["type"], "dir");
    assert_eq!(entries[0]["annotation"], "containing");
    assert_eq!(entries[1]["name"], "a.txt");
    assert_eq!(entries[1]["type"], "file");
}

#[test]
fn test_bench_appends_report_row() {
    let tree = TestTree::new();
    tree.add_file("t/a.txt", "a");

    for _ in 0..2 {
        let (stdout, _stderr, success) =
            run_dirwalk(tree.path(), &["t", "2", "--bench", "3", "--report", "times.csv"]);
        assert!(success);
        assert!(stdout.contains("RECURSIVE:"));
        assert!(stdout.contains("SORTED:"));
        assert!(!stdout.contains("a.txt"), "tree should not be printed");
    }

    let report = std::fs::read_to_string(tree.path().join("times.csv")).unwrap();
    assert_eq!(report.lines().count(), 2);
    assert!(report.lines().all(|l| l.contains("\"t\",2,")));
}

#[test]
fn test_bench_rejects_zero_iterations() {
    let tree = TestTree::new();
    Command::cargo_bin("dirwalk")
        .unwrap()
        .args([".", "--bench", "0"])
        .current_dir(tree.path())
        .assert()
        .failure();
}

#[test]
fn test_not_a_directory_reports_on_stderr() {
    let tree = TestTree::new();
    tree.add_file("plain.txt", "x");

    Command::cargo_bin("dirwalk")
        .unwrap()
        .arg("plain.txt")
        .current_dir(tree.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "provided path does not name a directory",
        ));
}

#[test]
fn test_negative_depth_rejected() {
    let tree = TestTree::new();
    Command::cargo_bin("dirwalk")
        .unwrap()
        .args([".", "-1"])
        .current_dir(tree.path())
        .assert()
        .failure();
}
