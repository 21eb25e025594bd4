use crate::domain::{CleanConfig, CleanReport, DuplicateRecord, FsError, SkippedFile};
use crate::ports::{FileSystemPort, HashingPort, ProgressPort, ReportPort};
use anyhow::Result;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

/// One deduplication session. Owns nothing beyond its ports; the digest
/// index and counters live inside a single `clean` call, so independent
/// sessions can run back to back in one process.
pub struct CleanerService<F, H, P> {
    filesystem: F,
    hasher: H,
    progress: P,
}

impl<F, H, P> CleanerService<F, H, P>
where
    F: FileSystemPort,
    H: HashingPort,
    P: ProgressPort,
{
    pub fn new(filesystem: F, hasher: H, progress: P) -> Self {
        Self {
            filesystem,
            hasher,
            progress,
        }
    }

    /// Walks every regular file under the configured root in sorted path
    /// order, hashing each one and deleting those whose digest was already
    /// seen. The first path in the ordering always survives. Per-file
    /// failures are recorded and skipped; only failure to enumerate the
    /// root aborts.
    pub fn clean(
        &self,
        config: &CleanConfig,
        reporter: &mut dyn ReportPort,
    ) -> Result<CleanReport> {
        let files = self.filesystem.list_files(&config.root)?;

        let mut report = CleanReport {
            passive: config.passive,
            ..CleanReport::default()
        };
        let mut index: HashMap<String, PathBuf> = HashMap::new();

        reporter.report("Duplicates:");
        self.progress.start(files.len() as u64);

        for (processed, path) in files.iter().enumerate() {
            match self.hasher.hash_file(path, config.hash_algorithm) {
                Ok(digest) => match index.entry(digest) {
                    Entry::Vacant(slot) => {
                        slot.insert(path.clone());
                        report.files_scanned += 1;
                    }
                    Entry::Occupied(slot) => {
                        let original = slot.get().clone();
                        reporter.report(&format!(
                            "\"{}\" is a duplicate of \"{}\"",
                            path.display(),
                            original.display()
                        ));
                        report.files_scanned += 1;
                        report.duplicates.push(DuplicateRecord {
                            duplicate: path.clone(),
                            original,
                        });
                        if !config.passive {
                            if let Err(error) = self.filesystem.remove_file(path) {
                                reporter.report(&format!(
                                    "failed to remove \"{}\": {}",
                                    path.display(),
                                    error
                                ));
                                report.delete_failures += 1;
                            }
                        }
                    }
                },
                Err(error) => {
                    reporter.report(&format!(
                        "failed to hash \"{}\": {}",
                        path.display(),
                        error
                    ));
                    report.skipped.push(SkippedFile {
                        path: path.clone(),
                        error,
                    });
                }
            }
            self.progress.update(processed as u64 + 1);
        }

        self.progress.finish();
        Ok(report)
    }

    /// Removes every directory under `root` left with no entries, iterating
    /// fresh passes until one removes nothing. A deletion can empty the
    /// parent, which the next pass picks up, so the pass count is bounded
    /// by tree depth. Directories vanishing mid-pass are skipped.
    pub fn prune_folders(&self, root: &Path, reporter: &mut dyn ReportPort) -> Result<u64> {
        reporter.report("Pruned directories:");
        let mut total = 0u64;
        loop {
            let mut removed_this_pass = 0u64;
            for dir in self.filesystem.list_dirs(root)? {
                match self.filesystem.dir_is_empty(&dir) {
                    Ok(true) => match self.filesystem.remove_empty_dir(&dir) {
                        Ok(()) => {
                            reporter.report(&format!("\"{}\"", dir.display()));
                            removed_this_pass += 1;
                        }
                        Err(FsError::NotFound(_)) => {}
                        Err(error) => {
                            reporter.report(&format!(
                                "failed to remove \"{}\": {}",
                                dir.display(),
                                error
                            ));
                        }
                    },
                    Ok(false) => {}
                    Err(FsError::NotFound(_)) => {}
                    Err(error) => {
                        reporter.report(&format!(
                            "failed to read \"{}\": {}",
                            dir.display(),
                            error
                        ));
                    }
                }
            }
            total += removed_this_pass;
            if removed_this_pass == 0 {
                break;
            }
        }
        Ok(total)
    }
}
