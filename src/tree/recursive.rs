//! RecursiveWalker - depth-first, emits entries as it descends

use std::path::Path;

use tracing::debug;

use crate::error::WalkError;

use super::entry::{DirAnnotation, RenderEntry};
use super::sink::TreeOutput;
use super::traversal::read_children;

/// Depth-first walker that writes each entry as soon as it is discovered.
///
/// Children appear in native enumeration order. Only the directory currently
/// being read is held open, so memory is O(depth).
pub struct RecursiveWalker {
    depth: usize,
}

impl RecursiveWalker {
    pub fn new(depth: usize) -> Self {
        Self { depth }
    }

    /// Walk `root`, which must already be known to be a directory.
    pub fn walk<O: TreeOutput + ?Sized>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<(), WalkError> {
        self.walk_dir(root, 1, self.depth, output)
    }

    /// `level` is the indent of this directory's children; its own header
    /// goes one level up.
    fn walk_dir<O: TreeOutput + ?Sized>(
        &self,
        path: &Path,
        level: usize,
        budget: usize,
        output: &mut O,
    ) -> Result<(), WalkError> {
        let header_indent = level - 1;

        if budget == 0 {
            let header = RenderEntry::dir(path, header_indent, DirAnnotation::Plain)?;
            output.write_entry(&header)?;
            return Ok(());
        }

        debug!(path = %path.display(), budget, "descending");

        let mut children = read_children(path)?.peekable();
        let annotation = DirAnnotation::for_dir(budget, children.peek().is_some());
        let header = RenderEntry::dir(path, header_indent, annotation)?;
        output.write_entry(&header)?;

        for child in children {
            let child = child?;
            if child.is_dir {
                self.walk_dir(&child.path, level + 1, budget - 1, output)?;
            } else {
                output.write_entry(&RenderEntry::file(&child.path, level)?)?;
            }
        }

        Ok(())
    }
}
