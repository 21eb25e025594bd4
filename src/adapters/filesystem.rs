use crate::domain::FsError;
use crate::ports::FileSystemPort;
use anyhow::{Result, bail};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Walker over the real filesystem. Symbolic links are never followed, so a
/// link to a file is not hashed and a link to a directory is not descended
/// into; only genuine regular files and directories are visited.
pub struct FileSystemAdapter;

impl FileSystemAdapter {
    pub fn new() -> Self {
        Self
    }

    fn walk(&self, root: &Path) -> Result<ignore::Walk> {
        // An unreadable or missing root must fail the whole enumeration;
        // the walker alone would yield nothing and look like an empty tree.
        let metadata = fs::metadata(root).map_err(|e| FsError::from_io(root, e))?;
        if !metadata.is_dir() {
            bail!("'{}' is not a directory", root.display());
        }
        let mut builder = WalkBuilder::new(root);
        // Visit everything: no gitignore handling, no hidden-file filtering.
        builder.standard_filters(false);
        builder.follow_links(false);
        Ok(builder.build())
    }
}

impl Default for FileSystemAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemPort for FileSystemAdapter {
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = self
            .walk(root)?
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        eprintln!("warning: skipping unreadable entry: {e}");
                        return None;
                    }
                };
                let file_type = entry.file_type()?;
                if file_type.is_file() {
                    Some(entry.into_path())
                } else {
                    None
                }
            })
            .collect();

        // Byte-lexicographic on the path string, so "first seen" is stable
        // across runs regardless of directory-entry order.
        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        Ok(files)
    }

    fn list_dirs(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let dirs: Vec<PathBuf> = self
            .walk(root)?
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        eprintln!("warning: skipping unreadable entry: {e}");
                        return None;
                    }
                };
                if entry.depth() == 0 {
                    return None;
                }
                let file_type = entry.file_type()?;
                if file_type.is_dir() {
                    Some(entry.into_path())
                } else {
                    None
                }
            })
            .collect();
        Ok(dirs)
    }

    fn dir_is_empty(&self, path: &Path) -> Result<bool, FsError> {
        let mut entries = fs::read_dir(path).map_err(|e| FsError::from_io(path, e))?;
        Ok(entries.next().is_none())
    }

    fn remove_file(&self, path: &Path) -> Result<(), FsError> {
        fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
    }

    fn remove_empty_dir(&self, path: &Path) -> Result<(), FsError> {
        // fs::remove_dir refuses non-empty directories, so a race that
        // repopulates the directory surfaces as an error, never data loss.
        fs::remove_dir(path).map_err(|e| FsError::from_io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn list_files_is_sorted_by_path_string() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        File::create(dir.path().join("b/z.txt")).unwrap();
        File::create(dir.path().join("a/y.txt")).unwrap();
        File::create(dir.path().join("x.txt")).unwrap();

        let files = FileSystemAdapter::new().list_files(dir.path()).unwrap();
        let mut sorted = files.clone();
        sorted.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        assert_eq!(files, sorted);
        assert_eq!(files.len(), 3);
        assert!(files[0].ends_with("a/y.txt"));
    }

    #[test]
    fn list_dirs_excludes_root_itself() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("one/two")).unwrap();

        let dirs = FileSystemAdapter::new().list_dirs(dir.path()).unwrap();
        assert_eq!(dirs.len(), 2);
        assert!(!dirs.contains(&dir.path().to_path_buf()));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let dir = tempdir().unwrap();
        let mut f = File::create(dir.path().join("real.txt")).unwrap();
        f.write_all(b"content").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.txt"))
            .unwrap();

        let files = FileSystemAdapter::new().list_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.txt"));
    }

    #[test]
    fn dir_is_empty_reflects_contents() {
        let dir = tempdir().unwrap();
        let adapter = FileSystemAdapter::new();
        assert!(adapter.dir_is_empty(dir.path()).unwrap());
        File::create(dir.path().join("f")).unwrap();
        assert!(!adapter.dir_is_empty(dir.path()).unwrap());
    }

    #[test]
    fn listing_a_missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let adapter = FileSystemAdapter::new();
        assert!(adapter.list_files(&missing).is_err());
        assert!(adapter.list_dirs(&missing).is_err());
    }

    #[test]
    fn listing_a_file_root_is_an_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        File::create(&file).unwrap();
        assert!(FileSystemAdapter::new().list_files(&file).is_err());
    }

    #[test]
    fn remove_file_reports_not_found() {
        let dir = tempdir().unwrap();
        let err = FileSystemAdapter::new()
            .remove_file(&dir.path().join("missing"))
            .unwrap_err();
        assert_eq!(err.kind(), crate::domain::FsErrorKind::NotFound);
    }
}
