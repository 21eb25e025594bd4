use crate::domain::CleanReport;
use crate::ports::OutputPort;
use anyhow::Result;
use console::style;

pub struct ConsoleOutputAdapter;

impl ConsoleOutputAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleOutputAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for ConsoleOutputAdapter {
    fn write_summary(&self, report: &CleanReport) -> Result<()> {
        println!();
        println!("{}", style("=== Clean Summary ===").bold());
        println!("Files scanned:      {}", report.files_scanned);
        if report.passive {
            println!(
                "Duplicates found:   {} {}",
                report.duplicates_removed(),
                style("(passive, nothing deleted)").yellow()
            );
        } else {
            println!("Duplicates removed: {}", report.duplicates_removed());
        }
        if report.pruned {
            println!("Folders pruned:     {}", report.folders_pruned);
        }
        if report.delete_failures > 0 {
            println!(
                "{}",
                style(format!(
                    "Failed deletions:   {}",
                    report.delete_failures
                ))
                .red()
            );
        }
        if !report.skipped.is_empty() {
            println!(
                "{}",
                style(format!("Files skipped:      {}", report.skipped.len())).red()
            );
            for skipped in &report.skipped {
                println!("  {}: {}", skipped.path.display(), skipped.error);
            }
        }
        Ok(())
    }
}

pub struct JsonOutputAdapter;

impl JsonOutputAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutputAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for JsonOutputAdapter {
    fn write_summary(&self, report: &CleanReport) -> Result<()> {
        let mut value = serde_json::to_value(report)?;
        if let Some(object) = value.as_object_mut() {
            object.insert(
                "files_skipped".to_string(),
                serde_json::json!(report.skipped.len()),
            );
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        Ok(())
    }
}
