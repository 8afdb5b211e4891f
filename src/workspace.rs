//! Scratch directory owned by a single analysis

use std::path::{Path, PathBuf};

use log::{debug, warn};
use tempfile::TempDir;

use crate::error::WorkspaceError;

const PREFIX: &str = "repo-analysis-";

/// A temporary directory that is removed exactly once: on the first call to
/// [`Workspace::cleanup`], or on drop if cleanup was never called.
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
    dir: Option<TempDir>,
}

impl Workspace {
    /// Allocate a new directory under the system temp dir.
    pub fn create() -> Result<Self, WorkspaceError> {
        Self::create_in(std::env::temp_dir())
    }

    /// Allocate a new directory under `parent`.
    pub fn create_in(parent: impl AsRef<Path>) -> Result<Self, WorkspaceError> {
        let dir = tempfile::Builder::new()
            .prefix(PREFIX)
            .tempdir_in(parent)
            .map_err(WorkspaceError::Create)?;
        let path = dir.path().to_path_buf();
        debug!("created workspace {}", path.display());
        Ok(Self {
            path,
            dir: Some(dir),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_cleaned_up(&self) -> bool {
        self.dir.is_none()
    }

    /// Remove the directory. Later calls are no-ops, and a directory that
    /// has already disappeared is not an error.
    pub fn cleanup(&mut self) -> Result<(), WorkspaceError> {
        let Some(dir) = self.dir.take() else {
            return Ok(());
        };
        match dir.close() {
            Ok(()) => {
                debug!("removed workspace {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(WorkspaceError::Cleanup {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            warn!("{}", e);
        }
    }
}
