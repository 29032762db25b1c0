//! Dirwalk - depth-limited directory listings with two traversal strategies

pub mod bench;
pub mod error;
pub mod naming;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use bench::{BenchConfig, BenchReport, TimingStats, time_strategy};
pub use error::WalkError;
pub use naming::{DisplayName, display_name, is_alias};
pub use output::{ConsoleFormatter, OutputConfig, print_json, render_line};
pub use tree::{
    DEFAULT_DEPTH, DirAnnotation, EntryCollector, EntryKind, LevelWalker, RecursiveWalker,
    RenderEntry, Strategy, TreeOutput, WalkerConfig, walk,
};
