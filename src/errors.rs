use std::path::PathBuf;
use thiserror::Error;

use crate::fixture::TreeState;

/// Errors produced while building or tearing down a file tree fixture.
#[derive(Error, Debug)]
pub enum TreeError {
    /// An entry path that cannot live under the fixture root.
    #[error("invalid entry `{path}`: {reason}")]
    InvalidEntry { path: String, reason: &'static str },

    /// The target of a file entry (or a directory entry) is already taken.
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Wrapper for underlying IO errors, with the path being worked on.
    #[error("I/O error at `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lifecycle operation was called in a state that does not allow it.
    #[error("cannot {op} a file tree that is {state}")]
    InvalidState { op: &'static str, state: TreeState },

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = TreeError> = std::result::Result<T, E>;
