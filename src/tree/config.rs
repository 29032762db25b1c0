//! Configuration types for tree walkers

use clap::ValueEnum;
use serde::Serialize;

/// Depth used when the caller does not pick one.
pub const DEFAULT_DEPTH: usize = 3;

/// Traversal algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Depth-first, output in native enumeration order as it is discovered
    #[default]
    Recursive,
    /// Build the whole bounded tree, then output sorted by full path
    Sorted,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Sorted => "sorted",
        }
    }
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Number of directory levels below the root that may be enumerated.
    pub depth: usize,
    pub strategy: Strategy,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            strategy: Strategy::default(),
        }
    }
}

impl WalkerConfig {
    pub fn new(depth: usize, strategy: Strategy) -> Self {
        Self { depth, strategy }
    }
}
