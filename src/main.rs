use clap::Parser;
use console::style;
use dupsweep::adapters::{
    ConsoleOutputAdapter, ConsolePrompt, ConsoleReportAdapter, ContentHasher, FileSystemAdapter,
    JsonOutputAdapter, LogFileAdapter, NullReportAdapter, ProgressBarAdapter, ScriptedPrompt,
    TeeReportAdapter,
};
use dupsweep::cli::{Cli, OutputFormat};
use dupsweep::ports::{ConfirmPort, OutputPort, ReportPort};
use dupsweep::services::CleanerService;
use std::env;
use std::process;

fn main() {
    let args = Cli::parse();

    let root = match args.path.canonicalize() {
        Ok(path) if path.is_dir() => path,
        _ => {
            eprintln!(
                "{} '{}' is not a directory",
                style("error:").red().bold(),
                args.path.display()
            );
            process::exit(1);
        }
    };

    println!();
    println!("{}", style("dupsweep").bold());
    println!("Recursive clean on '{}'", root.display());

    let prompt: Box<dyn ConfirmPort> = if args.no_input {
        Box::new(ScriptedPrompt::assume(true))
    } else {
        Box::new(ConsolePrompt::new())
    };
    match prompt.confirm("Perform recursive clean?") {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("Aborted.");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", style("error:").red().bold(), e);
            process::exit(1);
        }
    }

    let log_output = args.log_output();
    let log_path = env::current_dir()
        .map(|cwd| cwd.join(&log_output))
        .unwrap_or_else(|_| log_output.clone());

    let mut sinks: Vec<Box<dyn ReportPort>> = Vec::new();
    if !args.quiet {
        match LogFileAdapter::create(&log_path) {
            Ok(log) => {
                if args.verbose || args.output.is_some() {
                    println!("Log file location: {}", log.path().display());
                } else {
                    println!("Log file location: {}", log_output.display());
                }
                sinks.push(Box::new(log));
            }
            Err(e) => {
                eprintln!(
                    "warning: could not create log file {}: {}",
                    log_path.display(),
                    e
                );
            }
        }
    }
    if args.verbose {
        sinks.push(Box::new(ConsoleReportAdapter::new()));
    }
    let mut reporter: Box<dyn ReportPort> = if sinks.is_empty() {
        Box::new(NullReportAdapter)
    } else {
        Box::new(TeeReportAdapter::new(sinks))
    };

    println!("Starting clean...");

    let mut config = args.to_clean_config();
    config.root = root.clone();
    let cleaner = CleanerService::new(
        FileSystemAdapter::new(),
        ContentHasher::new(),
        ProgressBarAdapter::new().with_quiet(args.quiet),
    );

    let mut report = match cleaner.clean(&config, reporter.as_mut()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", style("error:").red().bold(), e);
            process::exit(1);
        }
    };

    if config.prune_empty && !config.passive {
        match cleaner.prune_folders(&root, reporter.as_mut()) {
            Ok(pruned) => {
                report.folders_pruned = pruned;
                report.pruned = true;
            }
            Err(e) => {
                eprintln!("{} {}", style("error:").red().bold(), e);
                process::exit(1);
            }
        }
    }

    let output: Box<dyn OutputPort> = match args.output_format {
        OutputFormat::Text => Box::new(ConsoleOutputAdapter::new()),
        OutputFormat::Json => Box::new(JsonOutputAdapter::new()),
    };
    if let Err(e) = output.write_summary(&report) {
        eprintln!("{} {}", style("error:").red().bold(), e);
        process::exit(1);
    }
}
