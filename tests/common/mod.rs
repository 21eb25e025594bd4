#![allow(dead_code)]

use dupsweep::adapters::{ContentHasher, FileSystemAdapter, ProgressBarAdapter};
use dupsweep::ports::ReportPort;
use dupsweep::services::CleanerService;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Reporter that records every line so tests can assert on the log stream.
pub struct CaptureReport {
    pub lines: Vec<String>,
}

impl CaptureReport {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }
}

impl ReportPort for CaptureReport {
    fn report(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

pub fn write_file(root: &Path, rel: &str, contents: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    File::create(&path).unwrap().write_all(contents).unwrap();
}

pub fn service() -> CleanerService<FileSystemAdapter, ContentHasher, ProgressBarAdapter> {
    CleanerService::new(
        FileSystemAdapter::new(),
        ContentHasher::new(),
        ProgressBarAdapter::new_quiet(),
    )
}
