//! Error types for rowmul.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid arguments for {name}: {value:?} is not an integer.")]
    Parse { name: &'static str, value: String },

    #[error("Error: numThreads must be between 1 and 8, got {0}.")]
    ThreadCount(i64),

    #[error("Error: N must be positive, got {0}.")]
    Dimension(i64),

    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {token:?} is not an integer", path.display())]
    Format { path: PathBuf, token: String },

    #[error("{}: expected {expected} values, found {found}", path.display())]
    ShortInput {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("failed to write report: {0}")]
    Report(#[source] io::Error),

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("worker {0} panicked")]
    WorkerPanicked(usize),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
