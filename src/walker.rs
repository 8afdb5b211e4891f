//! RepoWalker - full traversal of a checked-out repository

use std::fs;
use std::path::Path;

use glob::Pattern;
use log::{debug, trace, warn};

use crate::error::WalkError;
use crate::scanner::scan_directory_with;
use crate::types::Folder;

/// Configuration for repository walking.
///
/// The default visits and counts everything, `.git` included.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Leave out any directory named `.git`
    pub skip_git_dir: bool,
    /// Entry names equal to, or matching the glob of, one of these patterns
    /// are neither reported nor counted
    pub ignore_patterns: Vec<String>,
}

/// One `ignore_patterns` entry. A pattern that is not a valid glob still
/// matches the entry with exactly that name.
#[derive(Debug)]
struct IgnorePattern {
    raw: String,
    glob: Option<Pattern>,
}

impl IgnorePattern {
    fn new(raw: &str) -> Self {
        let glob = match Pattern::new(raw) {
            Ok(p) => Some(p),
            Err(e) => {
                warn!("ignore pattern {:?} is not a valid glob ({}), matching exact name only", raw, e);
                None
            }
        };
        Self {
            raw: raw.to_string(),
            glob,
        }
    }

    fn matches(&self, name: &str) -> bool {
        name == self.raw || self.glob.as_ref().is_some_and(|g| g.matches(name))
    }
}

/// Everything collected in one pass over a repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkResult {
    /// One entry per non-root directory, in depth-first pre-order
    pub folders: Vec<Folder>,
    /// Sum of every file's size in the tree, root-level files included
    pub total_bytes: u64,
}

/// Depth-first walker producing a [`WalkResult`].
pub struct RepoWalker {
    config: WalkerConfig,
    patterns: Vec<IgnorePattern>,
}

impl RepoWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let patterns = config
            .ignore_patterns
            .iter()
            .map(|p| IgnorePattern::new(p))
            .collect();
        Self { config, patterns }
    }

    /// Walk the tree rooted at `root`. The root is never reported as a
    /// folder, but files directly inside it count toward the total.
    /// The first error aborts the walk.
    pub fn walk(&self, root: &Path) -> Result<WalkResult, WalkError> {
        let mut folders = Vec::new();
        let total_bytes = self.walk_dir(root, root, &mut folders)?;
        debug!(
            "walked {}: {} folders, {} bytes",
            root.display(),
            folders.len(),
            total_bytes
        );
        Ok(WalkResult {
            folders,
            total_bytes,
        })
    }

    /// Visit `path` and everything below it, returning the byte count of the
    /// subtree. Folders are appended to `folders` in pre-order.
    fn walk_dir(
        &self,
        path: &Path,
        root: &Path,
        folders: &mut Vec<Folder>,
    ) -> Result<u64, WalkError> {
        let io_err = |source: std::io::Error| WalkError::Io {
            path: path.to_path_buf(),
            source,
        };

        if path != root {
            let folder = scan_directory_with(path, root, |name| self.matches_ignore(name))?;
            trace!("scanned {} ({} files)", folder.name, folder.files.len());
            folders.push(folder);
        }

        let mut entries = fs::read_dir(path)
            .map_err(io_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(io_err)?;
        entries.sort_by_key(|e| e.file_name());

        let mut total = 0u64;
        for entry in entries {
            let name = entry.file_name().to_string_lossy().to_string();
            if self.matches_ignore(&name) {
                continue;
            }
            let entry_path = entry.path();

            // Links are never followed, so a symlinked directory counts as a file
            let metadata = fs::symlink_metadata(&entry_path).map_err(|source| WalkError::Io {
                path: entry_path.clone(),
                source,
            })?;

            if metadata.is_dir() {
                if self.config.skip_git_dir && name == ".git" {
                    continue;
                }
                total += self.walk_dir(&entry_path, root, folders)?;
            } else {
                total += metadata.len();
            }
        }

        Ok(total)
    }

    fn matches_ignore(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }
}

impl Default for RepoWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}
