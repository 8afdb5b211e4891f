//! Single-directory scan: immediate files of one folder and their sizes

use std::fs;
use std::path::Path;

use crate::error::ScanError;
use crate::types::{FileEntry, Folder};

/// Build a [`Folder`] for `path` holding every non-directory child.
///
/// Subdirectories are skipped, not descended into. Sizes come from
/// `symlink_metadata`, so a symbolic link is measured as the link itself.
/// Entries are returned in file-name order.
pub fn scan_directory(path: &Path, repo_root: &Path) -> Result<Folder, ScanError> {
    scan_directory_with(path, repo_root, |_| false)
}

/// Like [`scan_directory`], but entries whose name satisfies `skip` are
/// dropped before their metadata is read.
pub fn scan_directory_with<F>(path: &Path, repo_root: &Path, skip: F) -> Result<Folder, ScanError>
where
    F: Fn(&str) -> bool,
{
    let entries = fs::read_dir(path).map_err(|source| ScanError::ReadDir {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = entries
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| ScanError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;
    entries.sort_by_key(|e| e.file_name());

    let mut files = Vec::new();
    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        if skip(&name) {
            continue;
        }
        let entry_path = entry.path();
        let metadata = fs::symlink_metadata(&entry_path).map_err(|source| ScanError::Metadata {
            path: entry_path.clone(),
            source,
        })?;
        if metadata.is_dir() {
            continue;
        }
        files.push(FileEntry::from_bytes(name, metadata.len()));
    }

    Ok(Folder {
        name: relative_name(path, repo_root),
        files,
    })
}

/// Path of `path` relative to `repo_root`, using `/` between components.
pub fn relative_name(path: &Path, repo_root: &Path) -> String {
    let relative = path.strip_prefix(repo_root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_sized(root: &Path, rel: &str, size: usize) {
        let full = root.join(rel);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, vec![0u8; size]).unwrap();
    }

    #[test]
    fn test_scan_directory_lists_files_only() {
        let dir = TempDir::new().unwrap();
        write_sized(dir.path(), "dir1/file3.txt", 512 * 1024);
        write_sized(dir.path(), "dir1/dir2/file4.txt", 3 * 1024 * 1024);

        let folder = scan_directory(&dir.path().join("dir1"), dir.path()).unwrap();
        assert_eq!(folder.name, "dir1");
        assert_eq!(folder.files.len(), 1, "subdirectories must not be listed");
        assert_eq!(folder.files[0].name, "file3.txt");
        assert_eq!(folder.files[0].size, 0.5);
        assert_eq!(folder.files[0].size_human, "512.00 KB");
    }

    #[test]
    fn test_scan_directory_nested_name() {
        let dir = TempDir::new().unwrap();
        write_sized(dir.path(), "a/b/c/leaf.txt", 10);

        let folder = scan_directory(&dir.path().join("a/b/c"), dir.path()).unwrap();
        assert_eq!(folder.name, "a/b/c");
        assert_eq!(folder.files[0].size_human, "10 B");
        assert_eq!(folder.files[0].size, 0.0);
    }

    #[test]
    fn test_scan_directory_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        write_sized(dir.path(), "d/zeta.txt", 1);
        write_sized(dir.path(), "d/alpha.txt", 1);
        write_sized(dir.path(), "d/mid.txt", 1);

        let folder = scan_directory(&dir.path().join("d"), dir.path()).unwrap();
        let names: Vec<_> = folder.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["alpha.txt", "mid.txt", "zeta.txt"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();

        let folder = scan_directory(&dir.path().join("empty"), dir.path()).unwrap();
        assert_eq!(folder.name, "empty");
        assert!(folder.files.is_empty());
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");

        let err = scan_directory(&missing, dir.path()).unwrap_err();
        assert!(matches!(err, ScanError::ReadDir { ref path, .. } if *path == missing));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_broken_symlink_measured_as_link() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("links")).unwrap();
        symlink("nonexistent.txt", dir.path().join("links/broken")).unwrap();

        let folder = scan_directory(&dir.path().join("links"), dir.path()).unwrap();
        assert_eq!(folder.files.len(), 1);
        assert_eq!(folder.files[0].name, "broken");
        // Link size is the length of its target path
        assert_eq!(folder.files[0].size_human, "15 B");
    }

    #[cfg(unix)]
    #[test]
    fn test_skip_runs_before_metadata() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        write_sized(dir.path(), "locked/scratch.tmp", 10);
        let locked = dir.path().join("locked");
        // Readable but not searchable: listing works, lstat of children fails
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o444)).unwrap();
        let searchable = fs::symlink_metadata(locked.join("scratch.tmp")).is_ok();

        let skipped = scan_directory_with(&locked, dir.path(), |name| name.ends_with(".tmp"));
        let unskipped = scan_directory(&locked, dir.path());

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Running as root bypasses permission checks
        if searchable {
            return;
        }
        let folder = skipped.unwrap();
        assert_eq!(folder.name, "locked");
        assert!(folder.files.is_empty());
        assert!(matches!(unskipped, Err(ScanError::Metadata { .. })));
    }

    #[test]
    fn test_scan_directory_with_skip() {
        let dir = TempDir::new().unwrap();
        write_sized(dir.path(), "d/keep.rs", 3);
        write_sized(dir.path(), "d/drop.log", 3);

        let folder = scan_directory_with(&dir.path().join("d"), dir.path(), |n| n == "drop.log")
            .unwrap();
        let names: Vec<_> = folder.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["keep.rs"]);
    }

    #[test]
    fn test_relative_name() {
        let root = Path::new("/tmp/repo");
        assert_eq!(relative_name(Path::new("/tmp/repo/src"), root), "src");
        assert_eq!(relative_name(Path::new("/tmp/repo/src/bin"), root), "src/bin");
        assert_eq!(relative_name(root, root), "");
    }
}
