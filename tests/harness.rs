//! Test harness for reposize integration tests

use std::path::Path;
use std::process::Command;

pub use reposize::test_utils::TestRepo;

/// Committed fixture repository matching the classic four-file layout.
#[allow(dead_code)]
pub fn sample_repo() -> TestRepo {
    let repo = TestRepo::with_git();
    repo.add_sized("file1.txt", 1024 * 1024);
    repo.add_sized("file2.txt", 2 * 1024 * 1024);
    repo.add_sized("dir1/file3.txt", 512 * 1024);
    repo.add_sized("dir1/dir2/file4.txt", 3 * 1024 * 1024);
    repo.commit("initial");
    repo
}

pub fn run_reposize(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_reposize");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run reposize");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let repo = TestRepo::new();
        assert!(repo.path().exists());
    }

    #[test]
    fn test_harness_git_init() {
        let repo = TestRepo::with_git();
        assert!(repo.path().join(".git").exists());
    }

    #[test]
    fn test_harness_add_sized() {
        let repo = TestRepo::with_git();
        let file_path = repo.add_sized("nested/blob.bin", 2048);
        assert_eq!(std::fs::metadata(file_path).unwrap().len(), 2048);
    }
}
