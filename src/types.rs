//! Serializable report records

use serde::Serialize;

use crate::size::{format_size, mb_rounded};

/// Complete size report for one repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepoAnalysis {
    pub clone_url: String,
    /// Total size in MB, rounded to two decimals
    pub size: f64,
    pub size_human: String,
    pub folders: Vec<Folder>,
    pub has_submodules: bool,
    /// Set only when analysis stopped early
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RepoAnalysis {
    /// Empty report for `url`. Every other field keeps its zero value until
    /// the corresponding analysis step succeeds.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            clone_url: url.into(),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Set both total size fields from one byte count.
    pub fn set_total_bytes(&mut self, bytes: u64) {
        self.size = mb_rounded(bytes);
        self.size_human = format_size(bytes);
    }

    /// Number of files across all reported folders.
    pub fn file_count(&self) -> usize {
        self.folders.iter().map(|f| f.files.len()).sum()
    }
}

/// One non-root directory and its immediate files.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Folder {
    /// Path relative to the repository root
    pub name: String,
    pub files: Vec<FileEntry>,
}

/// A single file inside a [`Folder`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub name: String,
    /// Size in MB, rounded to two decimals
    pub size: f64,
    pub size_human: String,
}

impl FileEntry {
    /// Build both size representations from a single byte count.
    pub fn from_bytes(name: impl Into<String>, bytes: u64) -> Self {
        Self {
            name: name.into(),
            size: mb_rounded(bytes),
            size_human: format_size(bytes),
        }
    }
}
