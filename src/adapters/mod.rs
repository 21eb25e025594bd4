pub mod confirm;
pub mod filesystem;
pub mod hasher;
pub mod output;
pub mod progress;
pub mod report;

pub use confirm::{ConsolePrompt, ScriptedPrompt};
pub use filesystem::FileSystemAdapter;
pub use hasher::ContentHasher;
pub use output::{ConsoleOutputAdapter, JsonOutputAdapter};
pub use progress::ProgressBarAdapter;
pub use report::{ConsoleReportAdapter, LogFileAdapter, NullReportAdapter, TeeReportAdapter};
