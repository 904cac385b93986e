//! fanout - distribute the files of one directory across many folders.
//!
//! Usage:
//!   fanout -f SRC -t ROOT[,ROOT...]      Copy files round-robin into folders
//!   fanout -f SRC -t ROOT --dry-run      Print the plan without copying
//!   fanout --help                        Show help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, bail};

use fanout_core::ExcludeSet;
use fanout_ops::{Assignment, DistributionReport, Distributor, SystemCopier, plan};
use fanout_scan::{SourceScanner, TargetScanner};

#[derive(Parser)]
#[command(
    name = "fanout",
    version,
    about = "Distribute the files of one directory across many folders",
    long_about = "fanout collects every file under a source directory and every folder \
                  nested at least two levels below the target roots, then copies files \
                  into folders round-robin.\n\n\
                  Names like .git and .idea are skipped on both sides. Copies run \
                  through the platform copy command; a failed copy is reported and the \
                  run continues."
)]
struct Cli {
    /// Source directory whose files are distributed
    #[arg(short = 'f', long = "from", value_name = "DIR")]
    from: PathBuf,

    /// Target roots scanned for destination folders (repeat or comma-separate)
    #[arg(
        short = 't',
        long = "to",
        value_name = "DIRS",
        required = true,
        value_delimiter = ','
    )]
    to: Vec<PathBuf>,

    /// Extra entry names to exclude, on top of the built-in set
    #[arg(long, value_name = "NAME")]
    exclude: Vec<String>,

    /// Print the plan without copying anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // All roots must exist before any scan starts.
    if !cli.from.exists() {
        bail!("source directory does not exist: {}", cli.from.display());
    }
    for target in &cli.to {
        if !target.exists() {
            bail!("target directory does not exist: {}", target.display());
        }
    }

    let excludes = ExcludeSet::with_extra(cli.exclude);

    eprintln!("Scanning {}...", cli.from.display());
    let files = SourceScanner::new(excludes.clone()).scan(&cli.from)?;

    let target_scanner = TargetScanner::new(excludes);
    let mut folders = Vec::new();
    for target in &cli.to {
        eprintln!("Scanning {}...", target.display());
        folders.extend(target_scanner.scan(target)?);
    }

    eprintln!(
        "Found {} source file(s), {} destination folder(s)",
        files.len(),
        folders.len()
    );

    let assignments = plan(&files, &folders)?;
    tracing::debug!(pairs = assignments.len(), "assignment plan ready");

    if cli.dry_run {
        print_plan(&assignments, cli.format)?;
        return Ok(());
    }

    let report = Distributor::new(SystemCopier::new()).run(&assignments);
    print_report(&report, cli.format)?;

    Ok(())
}

/// Print the assignments a run would perform.
fn print_plan(assignments: &[Assignment], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(60));
            println!(" Planned copies: {}", assignments.len());
            println!("{}", "─".repeat(60));
            for assignment in assignments {
                println!(
                    " {} -> {}",
                    assignment.file.display(),
                    assignment.folder.display()
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(assignments)?);
        }
    }

    Ok(())
}

/// Print the outcome of a run.
fn print_report(report: &DistributionReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(60));
            println!(
                " Copied {} of {} file(s) - {}",
                report.succeeded,
                report.attempted,
                format_size(report.bytes_copied)
            );
            println!("{}", "─".repeat(60));

            if !report.failures.is_empty() {
                println!();
                println!(" {} failure(s):", report.failed);
                for failure in &report.failures {
                    println!(
                        "   {} -> {}: {}",
                        failure.file.display(),
                        failure.folder.display(),
                        failure.message
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }

    Ok(())
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
