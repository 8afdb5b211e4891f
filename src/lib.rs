//! Reposize - clone a repository and report its file and folder sizes

pub mod analyzer;
pub mod error;
pub mod git;
pub mod output;
pub mod scanner;
pub mod size;
pub mod types;
pub mod walker;
pub mod workspace;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use analyzer::Analyzer;
pub use error::{AnalysisError, CloneError, ScanError, WalkError, WorkspaceError};
pub use git::{CloneConfig, Cloner, GitCloner, has_submodules};
pub use output::{print_json, write_json};
pub use scanner::{scan_directory, scan_directory_with};
pub use size::{bytes_to_mb, format_size, mb_rounded, round_two_decimals};
pub use types::{FileEntry, Folder, RepoAnalysis};
pub use walker::{RepoWalker, WalkResult, WalkerConfig};
pub use workspace::Workspace;
