use crate::ports::ReportPort;
use anyhow::Result;
use console::style;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Plain-text log sink, truncated at creation. Writes are best effort: the
/// first failure prints a warning to stderr and later lines are dropped
/// silently rather than aborting the run.
pub struct LogFileAdapter {
    path: PathBuf,
    file: File,
    warned: bool,
}

impl LogFileAdapter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            warned: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportPort for LogFileAdapter {
    fn report(&mut self, line: &str) {
        if let Err(e) = writeln!(self.file, "{line}") {
            if !self.warned {
                eprintln!(
                    "warning: failed to write to log file {}: {}",
                    self.path.display(),
                    e
                );
                self.warned = true;
            }
        }
    }
}

/// Echoes report lines to the console, dimmed so they read as detail under
/// the summary.
pub struct ConsoleReportAdapter;

impl ConsoleReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for ConsoleReportAdapter {
    fn report(&mut self, line: &str) {
        println!("{}", style(line).dim());
    }
}

pub struct NullReportAdapter;

impl ReportPort for NullReportAdapter {
    fn report(&mut self, _line: &str) {}
}

/// Fans a report line out to every configured sink. With no sinks it acts
/// as a null reporter.
pub struct TeeReportAdapter {
    sinks: Vec<Box<dyn ReportPort>>,
}

impl TeeReportAdapter {
    pub fn new(sinks: Vec<Box<dyn ReportPort>>) -> Self {
        Self { sinks }
    }
}

impl ReportPort for TeeReportAdapter {
    fn report(&mut self, line: &str) {
        for sink in &mut self.sinks {
            sink.report(line);
        }
    }
}
