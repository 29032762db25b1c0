//! Directory enumeration shared by both walkers.
//!
//! Children come back in whatever order the platform's `read_dir` yields
//! them. Nothing here sorts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WalkError;

/// A direct child of an enumerated directory.
#[derive(Debug, Clone)]
pub struct Child {
    pub path: PathBuf,
    /// Status check result at discovery time (follows symlinks).
    pub is_dir: bool,
}

/// Lazy iterator over the direct children of one directory.
pub struct Children {
    parent: PathBuf,
    inner: fs::ReadDir,
}

impl Iterator for Children {
    type Item = Result<Child, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        Some(
            entry
                .map(|e| {
                    let path = e.path();
                    let is_dir = path.is_dir();
                    Child { path, is_dir }
                })
                .map_err(|e| WalkError::io(&self.parent, e)),
        )
    }
}

/// Start enumerating `path` with a single listing call.
pub fn read_children(path: &Path) -> Result<Children, WalkError> {
    let inner = fs::read_dir(path).map_err(|e| WalkError::io(path, e))?;
    Ok(Children {
        parent: path.to_path_buf(),
        inner,
    })
}
