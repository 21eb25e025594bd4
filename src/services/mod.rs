pub mod cleaner;

pub use cleaner::CleanerService;
