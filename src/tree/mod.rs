//! Directory tree walking logic
//!
//! Two interchangeable strategies produce the same set of entries:
//!
//! - `RecursiveWalker`: depth-first, writes entries as they are discovered,
//!   in native enumeration order, indented by recursion depth
//! - `LevelWalker`: expands the bounded tree into memory first, then writes
//!   entries sorted by full path, indented by separator count

mod config;
mod entry;
mod level;
mod recursive;
mod sink;
mod traversal;

use std::path::Path;

use tracing::debug;

use crate::error::WalkError;

pub use config::{DEFAULT_DEPTH, Strategy, WalkerConfig};
pub use entry::{DirAnnotation, Entry, EntryKind, RenderEntry, separator_count};
pub use level::{LevelWalker, expand_pass, flatten};
pub use recursive::RecursiveWalker;
pub use sink::{EntryCollector, TreeOutput};
pub use traversal::{Child, Children, read_children};

/// Walk `root` with the configured strategy, writing entries to `output`.
///
/// Fails with [`WalkError::InvalidRoot`] before any traversal when `root` is
/// not a directory.
pub fn walk<O: TreeOutput + ?Sized>(
    root: &Path,
    config: &WalkerConfig,
    output: &mut O,
) -> Result<(), WalkError> {
    if !root.is_dir() {
        return Err(WalkError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }

    debug!(
        root = %root.display(),
        depth = config.depth,
        strategy = config.strategy.name(),
        "walk"
    );

    match config.strategy {
        Strategy::Recursive => RecursiveWalker::new(config.depth).walk(root, output)?,
        Strategy::Sorted => LevelWalker::new(config.depth).walk(root, output)?,
    }
    output.finish()?;
    Ok(())
}
