//! Entry model shared by both walkers

use std::path::{Path, PathBuf, is_separator};

use serde::Serialize;

use crate::error::WalkError;
use crate::naming::display_name;

/// Trailing annotation on a directory line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirAnnotation {
    /// Enumerated and had at least one child.
    Containing,
    /// Enumerated and had no children.
    EmptyFolder,
    /// Depth budget exhausted; never enumerated.
    Plain,
}

impl DirAnnotation {
    /// Annotation for a directory that was (or was not) enumerated.
    pub fn for_dir(budget: usize, has_children: bool) -> Self {
        match (budget > 0, has_children) {
            (false, _) => DirAnnotation::Plain,
            (true, true) => DirAnnotation::Containing,
            (true, false) => DirAnnotation::EmptyFolder,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            DirAnnotation::Containing => " - a directory containing:",
            DirAnnotation::EmptyFolder => " - an empty folder.",
            DirAnnotation::Plain => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "annotation", rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir(DirAnnotation),
}

/// One line of output: what the renderer needs, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RenderEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub indent: usize,
    #[serde(flatten)]
    pub kind: EntryKind,
}

impl RenderEntry {
    /// Render entry for a directory, resolving "."/".." aliases.
    pub fn dir(
        path: &Path,
        indent: usize,
        annotation: DirAnnotation,
    ) -> Result<Self, WalkError> {
        let resolved = display_name(path)?;
        Ok(Self {
            name: resolved.name,
            alias: resolved.alias,
            indent,
            kind: EntryKind::Dir(annotation),
        })
    }

    pub fn file(path: &Path, indent: usize) -> Result<Self, WalkError> {
        let resolved = display_name(path)?;
        Ok(Self {
            name: resolved.name,
            alias: resolved.alias,
            indent,
            kind: EntryKind::File,
        })
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Dir(_))
    }
}

/// A discovered filesystem object held in the sorted walker's arena.
///
/// `is_directory` is read once at construction and never re-checked.
#[derive(Debug, Clone)]
pub struct Entry {
    pub full_path: PathBuf,
    pub is_directory: bool,
    pub depth_budget: usize,
    pub expanded: bool,
    pub children_files: Vec<PathBuf>,
    /// Arena indices of child directories.
    pub children_dirs: Vec<usize>,
}

impl Entry {
    pub fn new(full_path: PathBuf, depth_budget: usize) -> Self {
        let is_directory = full_path.is_dir();
        Self {
            full_path,
            is_directory,
            depth_budget,
            expanded: depth_budget == 0,
            children_files: Vec::new(),
            children_dirs: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children_files.is_empty() || !self.children_dirs.is_empty()
    }

    pub fn annotation(&self) -> DirAnnotation {
        DirAnnotation::for_dir(self.depth_budget, self.has_children())
    }
}

/// Number of separator characters in the path text.
pub fn separator_count(path: &Path) -> usize {
    path.to_string_lossy().chars().filter(|c| is_separator(*c)).count()
}
