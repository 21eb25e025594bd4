use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Chunk size used when streaming file contents through a hasher.
pub const HASH_CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HashAlgorithm {
    Sha256,
    Blake3,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Blake3 => "blake3",
        }
    }
}

/// A filesystem operation failure, classified so callers can branch on kind.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {0}")]
    NotFound(PathBuf),
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FsErrorKind {
    NotFound,
    PermissionDenied,
    Io,
}

impl FsError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn kind(&self) -> FsErrorKind {
        match self {
            FsError::NotFound(_) => FsErrorKind::NotFound,
            FsError::PermissionDenied(_) => FsErrorKind::PermissionDenied,
            FsError::Io { .. } => FsErrorKind::Io,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(p) | FsError::PermissionDenied(p) => p,
            FsError::Io { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub root: PathBuf,
    pub passive: bool,
    pub prune_empty: bool,
    pub hash_algorithm: HashAlgorithm,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            passive: false,
            prune_empty: false,
            hash_algorithm: HashAlgorithm::Sha256,
        }
    }
}

impl CleanConfig {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }

    pub fn with_passive(mut self, passive: bool) -> Self {
        self.passive = passive;
        self
    }

    pub fn with_prune_empty(mut self, prune: bool) -> Self {
        self.prune_empty = prune;
        self
    }

    pub fn with_hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = algorithm;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DuplicateRecord {
    pub duplicate: PathBuf,
    pub original: PathBuf,
}

/// A file the scan could not hash; excluded from every counter.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: FsError,
}

#[derive(Debug, Default, Serialize)]
pub struct CleanReport {
    pub files_scanned: u64,
    pub duplicates: Vec<DuplicateRecord>,
    pub delete_failures: u64,
    pub folders_pruned: u64,
    pub passive: bool,
    pub pruned: bool,
    #[serde(skip)]
    pub skipped: Vec<SkippedFile>,
}

impl CleanReport {
    pub fn duplicates_removed(&self) -> u64 {
        self.duplicates.len() as u64
    }

    pub fn unique_files(&self) -> u64 {
        self.files_scanned - self.duplicates_removed()
    }
}
