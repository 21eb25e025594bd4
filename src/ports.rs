use crate::domain::{CleanReport, FsError, HashAlgorithm};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub trait FileSystemPort {
    /// All regular files under `root`, sorted ascending by path string.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
    /// All directories strictly below `root`.
    fn list_dirs(&self, root: &Path) -> Result<Vec<PathBuf>>;
    fn dir_is_empty(&self, path: &Path) -> Result<bool, FsError>;
    fn remove_file(&self, path: &Path) -> Result<(), FsError>;
    fn remove_empty_dir(&self, path: &Path) -> Result<(), FsError>;
}

pub trait HashingPort {
    fn hash_file(&self, path: &Path, algorithm: HashAlgorithm) -> Result<String, FsError>;
}

/// Best-effort line sink; implementations must never fail the caller.
pub trait ReportPort {
    fn report(&mut self, line: &str);
}

pub trait ConfirmPort {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

pub trait ProgressPort {
    fn start(&self, total: u64);
    fn update(&self, processed: u64);
    fn finish(&self);
}

pub trait OutputPort {
    fn write_summary(&self, report: &CleanReport) -> Result<()>;
}
