//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::tree::{EntryCollector, RenderEntry, Strategy, WalkerConfig, walk};

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a (possibly nested) directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Fill the tree with `width` files and `width` subdirectories per level,
    /// `levels` levels deep.
    pub fn populate(&self, width: usize, levels: usize) {
        fn fill(dir: &Path, width: usize, levels: usize) {
            for i in 0..width {
                fs::write(dir.join(format!("file_{}.txt", i)), "x")
                    .expect("Failed to write file");
            }
            if levels == 0 {
                return;
            }
            for i in 0..width {
                let sub = dir.join(format!("dir_{}", i));
                fs::create_dir_all(&sub).expect("Failed to create dir");
                fill(&sub, width, levels - 1);
            }
        }
        fill(self.dir.path(), width, levels);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk `root` and return everything the walker emitted.
pub fn collect_entries(root: &Path, depth: usize, strategy: Strategy) -> Vec<RenderEntry> {
    let mut collector = EntryCollector::new();
    walk(root, &WalkerConfig::new(depth, strategy), &mut collector).expect("walk failed");
    collector.into_entries()
}
