//! Display names for filesystem paths
//!
//! Most paths display as their last component. Paths ending in the "." or ".."
//! aliases are canonicalized first so the listing shows the real directory
//! name, and the alias text is kept for an "a.k.a." annotation.

use std::path::{Path, PathBuf, is_separator};

use crate::error::WalkError;

/// Resolved display name of a path plus the alias used to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName {
    pub name: String,
    pub alias: Option<String>,
}

/// Check whether the raw terminal component of `path` is "." or "..".
///
/// `Path::components` normalizes interior "." away, so this inspects the
/// path text directly.
pub fn is_alias(path: &Path) -> bool {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim_end_matches(is_separator);
    let last = trimmed.rsplit(is_separator).next().unwrap_or(trimmed);
    last == "." || last == ".."
}

/// Resolve the display name for `path`.
///
/// Touches the filesystem only for alias paths and paths with no file name.
pub fn display_name(path: &Path) -> Result<DisplayName, WalkError> {
    if is_alias(path) {
        return Ok(DisplayName {
            name: leaf_name(&canonical(path)?),
            alias: Some(path.to_string_lossy().into_owned()),
        });
    }

    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => leaf_name(&canonical(path)?),
    };
    Ok(DisplayName { name, alias: None })
}

fn canonical(path: &Path) -> Result<PathBuf, WalkError> {
    path.canonicalize().map_err(|source| WalkError::Resolution {
        path: path.to_path_buf(),
        source,
    })
}

/// Last component of `path`, or the whole path when it has none (e.g. "/").
pub fn leaf_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
