use crate::domain::{CleanConfig, HashAlgorithm};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
pub enum HashAlgorithmChoice {
    #[value(help = "SHA-256, the default")]
    Sha256,
    #[value(help = "BLAKE3, a faster 256-bit cryptographic hash")]
    Blake3,
}

impl From<HashAlgorithmChoice> for HashAlgorithm {
    fn from(choice: HashAlgorithmChoice) -> Self {
        match choice {
            HashAlgorithmChoice::Sha256 => HashAlgorithm::Sha256,
            HashAlgorithmChoice::Blake3 => HashAlgorithm::Blake3,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "dupsweep")]
#[command(about = "Removes duplicate files from a directory tree, keeping the first copy in path order")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Root directory to clean")]
    pub path: PathBuf,

    #[arg(
        short = 'n',
        long = "no-input",
        help = "Skip the confirmation prompt"
    )]
    pub no_input: bool,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Do not write a log file, and suppress progress output"
    )]
    pub quiet: bool,

    #[arg(
        short = 'o',
        long = "output",
        help = "Log file path, relative to the current directory (defaults to log.txt)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        help = "Echo every removal to the console"
    )]
    pub verbose: bool,

    #[arg(
        long = "passive",
        help = "Detect and report duplicates without deleting anything"
    )]
    pub passive: bool,

    #[arg(
        long = "prune",
        help = "Remove directories left empty after deduplication"
    )]
    pub prune: bool,

    #[arg(
        short = 'a',
        long = "algorithm",
        help = "Content hash algorithm",
        value_enum,
        default_value = "sha256"
    )]
    pub hash_algorithm: HashAlgorithmChoice,

    #[arg(
        short = 'f',
        long = "format",
        help = "Summary output format",
        value_enum,
        default_value = "text"
    )]
    pub output_format: OutputFormat,
}

impl Cli {
    pub fn log_output(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from("log.txt"))
    }

    pub fn to_clean_config(&self) -> CleanConfig {
        CleanConfig::new(self.path.clone())
            .with_passive(self.passive)
            .with_prune_empty(self.prune)
            .with_hash_algorithm(self.hash_algorithm.clone().into())
    }
}
