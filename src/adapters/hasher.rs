use crate::domain::{FsError, HASH_CHUNK_SIZE, HashAlgorithm};
use crate::ports::HashingPort;
use blake3::Hasher as Blake3Hasher;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Streams file contents through the selected digest in fixed-size chunks.
/// Whole files are never held in memory; the handle is dropped before the
/// next file is opened.
pub struct ContentHasher;

impl ContentHasher {
    pub fn new() -> Self {
        Self
    }

    fn stream_chunks<F>(path: &Path, mut update_fn: F) -> Result<(), FsError>
    where
        F: FnMut(&[u8]),
    {
        let file = File::open(path).map_err(|e| FsError::from_io(path, e))?;
        let mut reader = BufReader::with_capacity(HASH_CHUNK_SIZE, file);
        let mut buffer = vec![0u8; HASH_CHUNK_SIZE];
        loop {
            let bytes_read = reader
                .read(&mut buffer)
                .map_err(|e| FsError::from_io(path, e))?;
            if bytes_read == 0 {
                break;
            }
            update_fn(&buffer[..bytes_read]);
        }
        Ok(())
    }
}

impl Default for ContentHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl HashingPort for ContentHasher {
    fn hash_file(&self, path: &Path, algorithm: HashAlgorithm) -> Result<String, FsError> {
        match algorithm {
            HashAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                Self::stream_chunks(path, |chunk| hasher.update(chunk))?;
                Ok(format!("{:x}", hasher.finalize()))
            }
            HashAlgorithm::Blake3 => {
                let mut hasher = Blake3Hasher::new();
                Self::stream_chunks(path, |chunk| {
                    hasher.update(chunk);
                })?;
                Ok(hasher.finalize().to_hex().to_string())
            }
        }
    }
}
