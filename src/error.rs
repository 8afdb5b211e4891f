//! Error types for cloning, scanning and walking

use std::io;
use std::path::PathBuf;

/// Failure to materialize a remote repository locally.
#[derive(Debug, thiserror::Error)]
pub enum CloneError {
    #[error("invalid repository URL {0:?}")]
    InvalidUrl(String),
    #[error("failed to clone repository {url}: {source}")]
    Git {
        url: String,
        #[source]
        source: git2::Error,
    },
    #[error("failed to list submodules: {source}")]
    Submodules {
        #[source]
        source: git2::Error,
    },
    #[error("failed to update submodule {name}: {source}")]
    Submodule {
        name: String,
        #[source]
        source: git2::Error,
    },
}

/// Failure to list one directory or read the size of one of its entries.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to get file info for {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a full repository traversal.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("failed to walk path {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Failure to allocate or release the scratch directory.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("failed to create temporary directory: {0}")]
    Create(#[source] io::Error),
    #[error("failed to cleanup temporary directory {}: {source}", .path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Any failure that stops an analysis. Its message is what the report's
/// `error` field carries.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
    #[error(transparent)]
    Clone(#[from] CloneError),
    #[error(transparent)]
    Walk(#[from] WalkError),
}
