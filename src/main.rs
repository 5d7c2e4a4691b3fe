//! mergesweep - resolve leftover merge conflicts by keeping the incoming side.
//!
//! Usage:
//!   msweep [PATH]              Scan, resolve every conflict, verify
//!   msweep scan [PATH]         List conflicted files without touching them
//!   msweep --format json       Print the report as JSON
//!   msweep --help              Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use mergesweep_resolve::{
    ConflictScan, ResolveOutcome, SweepConfig, SweepEvent, SweepReport, Sweeper,
};
use mergesweep_scan::ConflictScanner;

#[derive(Parser)]
#[command(
    name = "mergesweep",
    version,
    about = "Resolve leftover merge conflicts by keeping the incoming side",
    long_about = "mergesweep finds files that still contain `<<<<<<< HEAD` markers and \
                  rewrites them in place, dropping the current (ours) side of every \
                  conflict and keeping the incoming (theirs) side.\n\n\
                  node_modules, .git, coverage, build and dist directories are skipped. \
                  Files are overwritten without a backup."
)]
struct Cli {
    /// Directory to sweep (defaults to current directory)
    #[arg(default_value = ".", env = "MERGESWEEP_ROOT")]
    path: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Log debug output to stderr (MERGESWEEP_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List conflicted files without modifying anything
    Scan {
        /// Directory to scan
        #[arg(default_value = ".", env = "MERGESWEEP_ROOT")]
        path: PathBuf,
    },
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
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Scan { path }) => run_scan(path, cli.format),
        None => run_sweep(cli.path, cli.format),
    }
}

/// Install the stderr log subscriber.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("MERGESWEEP_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: PathBuf) -> Result<SweepConfig> {
    let config = SweepConfig::new(path);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Scan, resolve and verify.
fn run_sweep(path: PathBuf, format: OutputFormat) -> Result<()> {
    let sweeper = Sweeper::new(load_config(path)?);

    match format {
        OutputFormat::Text => {
            sweeper.run(print_event);
        }
        OutputFormat::Json => {
            let report: SweepReport = sweeper.run(|_| {});
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Scan only.
fn run_scan(path: PathBuf, format: OutputFormat) -> Result<()> {
    let config = load_config(path)?;

    match format {
        OutputFormat::Text => {
            eprintln!("Searching {} for merge conflicts...", config.root.display());
            let scan = ConflictScanner::new().scan(&config);
            print_discovered(&scan);
        }
        OutputFormat::Json => {
            let scan = ConflictScanner::new().scan(&config);
            println!("{}", serde_json::to_string_pretty(&scan)?);
        }
    }

    Ok(())
}

/// Render sweep progress on the console.
fn print_event(event: SweepEvent<'_>) {
    match event {
        SweepEvent::ScanStarted { root } => {
            eprintln!("Searching {} for merge conflicts...", root.display());
        }
        SweepEvent::Scanned { scan } => {
            print_discovered(scan);
            if !scan.is_empty() {
                println!();
                println!("Resolving conflicts...");
            }
        }
        SweepEvent::FileFinished { path, result } => match result {
            Ok(ResolveOutcome::Resolved(summary)) => {
                let note = if summary.unterminated {
                    " (file ends inside a conflict block)"
                } else {
                    ""
                };
                println!(
                    "✓ Resolved {} conflict(s) in {}{}",
                    summary.conflicts,
                    path.display(),
                    note
                );
            }
            Ok(ResolveOutcome::Clean) => {
                println!("- No line-leading conflict markers in {}", path.display());
            }
            Err(err) => println!("✗ {err}"),
        },
        SweepEvent::Tally { resolved, total } => {
            println!();
            println!("✓ Successfully resolved conflicts in {resolved}/{total} file(s)");
        }
        SweepEvent::Verified { scan } => {
            println!();
            if scan.is_empty() {
                println!("✓ All conflicts resolved successfully!");
            } else {
                println!("⚠ Warning: {} file(s) still have conflicts:", scan.len());
                for path in &scan.files {
                    println!("  - {}", path.display());
                }
            }
        }
    }
}

/// Print the files a scan found, plus anything it could not read.
fn print_discovered(scan: &ConflictScan) {
    if scan.is_empty() {
        println!("No merge conflicts found!");
    } else {
        println!();
        println!("Found {} file(s) with conflicts:", scan.len());
        for path in &scan.files {
            println!("  - {}", path.display());
        }
    }

    if scan.has_warnings() {
        println!();
        println!("{} warning(s) during scan:", scan.warnings.len());
        for warning in &scan.warnings {
            println!("  ! {warning}");
        }
    }
}
