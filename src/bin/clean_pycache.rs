//! clean-pycache: recursively find and delete `__pycache__` folders.

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use treescan::cli::exit_on_error;
use treescan::logging::init_logging;
use treescan_core::cleanup::{clean_pycache, CleanOptions, CleanReport, PYCACHE_DIR};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Recursively clean __pycache__ folders from a specified directory.",
    long_about = None
)]
struct Args {
    /// The root directory to scan and clean
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Show what would be deleted without actually deleting anything
    #[arg(short, long, default_value_t = false)]
    dry_run: bool,

    /// Enable debug output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    exit_on_error(run(args));
}

fn run(args: Args) -> anyhow::Result<()> {
    let options = CleanOptions {
        dry_run: args.dry_run,
    };
    let report = clean_pycache(&args.directory, options)?;
    summarize(&report, options);
    Ok(())
}

fn summarize(report: &CleanReport, options: CleanOptions) {
    let found = report.found.len();
    if options.dry_run {
        if found > 0 {
            info!("[DRY RUN] Found {found} {PYCACHE_DIR} folder(s) that would be deleted.");
        } else {
            info!(
                "[DRY RUN] No {PYCACHE_DIR} folders found in '{}'.",
                report.root.display()
            );
        }
        info!("Dry run complete. {found} {PYCACHE_DIR} folder(s) identified.");
        return;
    }

    if report.deleted > 0 {
        info!(
            "Successfully deleted {} {PYCACHE_DIR} folder(s).",
            report.deleted
        );
    } else if found > 0 {
        warn!("Found {found} {PYCACHE_DIR} folder(s) but could not delete any (check permissions).");
    } else {
        info!(
            "No {PYCACHE_DIR} folders found to delete in '{}'.",
            report.root.display()
        );
    }
    info!(
        "Cleaning complete. {} {PYCACHE_DIR} folder(s) removed.",
        report.deleted
    );
}
