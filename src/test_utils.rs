//! Test utilities for creating temporary git repositories.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// Provides methods for creating files of a given size, git initialization,
/// and committing, so the directory can be cloned by path.
/// The repository is automatically cleaned up when dropped.
pub struct TestRepo {
    dir: TempDir,
    git_initialized: bool,
}

impl TestRepo {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            git_initialized: false,
        }
    }

    /// Create a new temporary directory with git initialized.
    pub fn with_git() -> Self {
        let mut repo = Self::new();
        repo.init_git();
        repo
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The directory path as a clone URL.
    pub fn url(&self) -> String {
        self.dir.path().to_string_lossy().to_string()
    }

    fn git(&self, args: &[&str]) {
        Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run git");
    }

    /// Initialize a git repository in the temporary directory.
    ///
    /// Also configures user.email and user.name for commits.
    pub fn init_git(&mut self) {
        self.git(&["init"]);
        self.git(&["config", "user.email", "test@test.com"]);
        self.git(&["config", "user.name", "Test"]);
        self.git_initialized = true;
    }

    /// Add a file of `size` zero bytes and stage it if git is initialized.
    ///
    /// Creates parent directories as needed.
    pub fn add_sized(&self, path: &str, size: usize) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, vec![0u8; size]).expect("Failed to write file");

        if self.git_initialized {
            self.git(&["add", path]);
        }

        full_path
    }

    /// Create a commit with the given message.
    pub fn commit(&self, message: &str) {
        assert!(self.git_initialized, "Git not initialized");
        self.git(&["commit", "-m", message, "--allow-empty"]);
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
