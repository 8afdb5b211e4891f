//! Git repository acquisition

use std::path::Path;

use git2::build::RepoBuilder;
use git2::{FetchOptions, Progress, RemoteCallbacks, Repository, SubmoduleUpdateOptions};
use log::{debug, info};

use crate::error::CloneError;

/// File at a repository root that declares submodules.
pub const SUBMODULE_MARKER: &str = ".gitmodules";

/// Check whether `root` declares submodules. Nested marker files are ignored.
pub fn has_submodules(root: &Path) -> bool {
    root.join(SUBMODULE_MARKER).exists()
}

/// Something that can materialize a remote repository into a local directory.
pub trait Cloner {
    /// Clone `url` into `dest`, which exists and is empty.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), CloneError>;

    /// Whether the checkout at `root` declares submodules.
    fn has_submodules(&self, root: &Path) -> bool {
        has_submodules(root)
    }
}

/// Clone options.
#[derive(Debug, Clone)]
pub struct CloneConfig {
    /// Initialize and update submodules, recursively
    pub recurse_submodules: bool,
    /// Shallow clone depth; `None` fetches full history
    pub depth: Option<i32>,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            recurse_submodules: true,
            depth: None,
        }
    }
}

/// [`Cloner`] backed by libgit2.
#[derive(Debug, Clone, Default)]
pub struct GitCloner {
    config: CloneConfig,
}

impl GitCloner {
    pub fn new(config: CloneConfig) -> Self {
        Self { config }
    }

    fn fetch_options(&self) -> FetchOptions<'static> {
        let mut callbacks = RemoteCallbacks::new();
        callbacks.transfer_progress(|progress| {
            log_progress(&progress);
            true
        });

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);
        if let Some(depth) = self.config.depth {
            fetch_options.depth(depth);
        }
        fetch_options
    }

    fn update_submodules(&self, repo: &Repository) -> Result<(), CloneError> {
        let submodules = repo
            .submodules()
            .map_err(|source| CloneError::Submodules { source })?;
        for mut submodule in submodules {
            let name = submodule.name().unwrap_or("<unnamed>").to_string();
            info!("updating submodule {}", name);

            let mut opts = SubmoduleUpdateOptions::new();
            opts.fetch(self.fetch_options());
            let submodule_err = |source: git2::Error| CloneError::Submodule {
                name: name.clone(),
                source,
            };
            submodule
                .update(true, Some(&mut opts))
                .map_err(submodule_err)?;

            let sub_repo = submodule.open().map_err(submodule_err)?;
            self.update_submodules(&sub_repo)?;
        }
        Ok(())
    }
}

impl Cloner for GitCloner {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), CloneError> {
        if url.trim().is_empty() {
            return Err(CloneError::InvalidUrl(url.to_string()));
        }
        let git_err = |source: git2::Error| CloneError::Git {
            url: url.to_string(),
            source,
        };

        info!(
            "cloning repository {}{}",
            url,
            if self.config.recurse_submodules {
                " (including submodules)"
            } else {
                ""
            }
        );

        let mut builder = RepoBuilder::new();
        builder.fetch_options(self.fetch_options());
        let repo = builder.clone(url, dest).map_err(git_err)?;

        if self.config.recurse_submodules {
            self.update_submodules(&repo)?;
        }

        debug!("clone of {} completed into {}", url, dest.display());
        Ok(())
    }
}

fn log_progress(progress: &Progress<'_>) {
    if progress.total_objects() > 0 && progress.received_objects() == progress.total_objects() {
        debug!(
            "received {}/{} objects ({} bytes)",
            progress.received_objects(),
            progress.total_objects(),
            progress.received_bytes()
        );
    }
}
