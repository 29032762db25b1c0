//! Error types for directory walking

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure is terminal for the walk that raised it.
#[derive(Error, Debug)]
pub enum WalkError {
    /// The root handed to [`crate::walk`] is not a directory.
    #[error("provided path does not name a directory: {}", path.display())]
    InvalidRoot { path: PathBuf },

    /// A "." or ".." path could not be canonicalized.
    #[error("cannot resolve '{}'", path.display())]
    Resolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Enumerating or inspecting a directory failed mid-walk.
    #[error("cannot read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A benchmark was asked to run zero times.
    #[error("benchmark needs at least one iteration")]
    NoIterations,

    /// The output sink rejected a write.
    #[error("error writing output")]
    Output(#[from] io::Error),
}

impl WalkError {
    /// The path this error occurred at, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::InvalidRoot { path }
            | Self::Resolution { path, .. }
            | Self::Io { path, .. } => Some(path),
            Self::NoIterations | Self::Output(_) => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
