//! Graph-specific error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::Name;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge refers to a node that hasn't been declared.
    #[error("Edge reference to undefined node {name}")]
    UnknownNode { name: Name },

    /// An edge was declared before any node it could start from.
    #[error("Edge to {target} declared before any node")]
    MissingSource { target: Name },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Fatal errors while loading a graph description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// Attach a path to an unqualified I/O error.
    pub(crate) fn with_path(self, path: PathBuf) -> Self {
        match self {
            LoadError::Io(source) => LoadError::Read { path, source },
            other => other,
        }
    }
}
