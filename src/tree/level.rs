//! LevelWalker - builds the bounded forest in memory, then renders it sorted

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::WalkError;

use super::entry::{Entry, RenderEntry, separator_count};
use super::sink::TreeOutput;
use super::traversal::read_children;

/// Walker that materializes the whole bounded subtree before writing anything.
///
/// Nodes live in an index arena. Expansion runs full passes over the arena,
/// including nodes appended during the pass, until a pass finds nothing left
/// to expand. The flattened result is sorted by full path text.
pub struct LevelWalker {
    depth: usize,
}

impl LevelWalker {
    pub fn new(depth: usize) -> Self {
        Self { depth }
    }

    pub fn walk<O: TreeOutput + ?Sized>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<(), WalkError> {
        let forest = self.build(root)?;
        for entry in flatten(&forest)? {
            output.write_entry(&entry)?;
        }
        Ok(())
    }

    /// Expand every directory with remaining budget into an arena.
    /// Index 0 is the root.
    pub fn build(&self, root: &Path) -> Result<Vec<Entry>, WalkError> {
        let mut nodes = vec![Entry::new(root.to_path_buf(), self.depth)];
        let mut passes = 1usize;
        while expand_pass(&mut nodes)? {
            passes += 1;
        }

        debug!(nodes = nodes.len(), passes, "forest complete");
        Ok(nodes)
    }
}

/// One full pass over the arena, expanding every unexpanded node, including
/// nodes appended during the pass.
///
/// Returns whether anything was expanded. A pass that returns false is the
/// fixed point.
pub fn expand_pass(nodes: &mut Vec<Entry>) -> Result<bool, WalkError> {
    let mut expanded_any = false;
    let mut i = 0;
    while i < nodes.len() {
        if !nodes[i].expanded {
            expanded_any = true;
            expand(nodes, i)?;
        }
        i += 1;
    }
    Ok(expanded_any)
}

/// Enumerate one node's children, appending child directories to the arena.
fn expand(nodes: &mut Vec<Entry>, index: usize) -> Result<(), WalkError> {
    let path = nodes[index].full_path.clone();
    let child_budget = nodes[index].depth_budget.saturating_sub(1);
    debug!(path = %path.display(), budget = nodes[index].depth_budget, "expanding");

    let mut files: Vec<PathBuf> = Vec::new();
    let mut dirs: Vec<usize> = Vec::new();
    for child in read_children(&path)? {
        let child = child?;
        if child.is_dir {
            dirs.push(nodes.len());
            nodes.push(Entry::new(child.path, child_budget));
        } else {
            files.push(child.path);
        }
    }

    let node = &mut nodes[index];
    node.children_files = files;
    node.children_dirs = dirs;
    node.expanded = true;
    Ok(())
}

/// Flatten the arena into render entries sorted by full path.
///
/// Indentation is the separator count of each path, not structural depth.
pub fn flatten(nodes: &[Entry]) -> Result<Vec<RenderEntry>, WalkError> {
    let mut flat: Vec<(&Path, bool, &Entry)> = Vec::new();
    for node in nodes {
        flat.push((node.full_path.as_path(), true, node));
        for file in &node.children_files {
            flat.push((file.as_path(), false, node));
        }
    }

    flat.sort_by(|a, b| a.0.as_os_str().cmp(b.0.as_os_str()));

    flat.into_iter()
        .map(|(path, is_node, node)| {
            let indent = separator_count(path);
            if is_node && node.is_directory {
                RenderEntry::dir(path, indent, node.annotation())
            } else {
                RenderEntry::file(path, indent)
            }
        })
        .collect()
}
