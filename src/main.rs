//! treescan: scan a directory recursively and emit its metadata as JSON.
//!
//! Thin binary entry point. All logic lives in the `treescan-core` crate.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use treescan::cli::exit_on_error;
use treescan::logging::init_logging;
use treescan_core::output::{write_json, OutputTarget, JSON_SUFFIX};
use treescan_core::scanner::{scan, ScanOptions};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Scan directory structure and output metadata as JSON.",
    long_about = None
)]
struct Args {
    /// Directory to scan (absolute or relative path)
    #[arg(value_name = "ROOT_DIR")]
    root_dir: PathBuf,

    /// Include hidden files and directories (prefix '.')
    #[arg(short, long, default_value_t = false)]
    include_hidden: bool,

    /// Output file; `-` writes to standard output [default: <ROOT_DIR name>.json]
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

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
    let options = ScanOptions {
        include_hidden: args.include_hidden,
    };
    let envelope = scan(&args.root_dir, options)?;

    let target = OutputTarget::from_arg(args.output.as_deref(), &args.root_dir, JSON_SUFFIX);
    write_json(&envelope, &target)?;
    info!(
        "Wrote {} records ({} files, {} bytes) to {}",
        envelope.items.len(),
        envelope.file_count(),
        envelope.total_file_bytes(),
        target.describe()
    );
    Ok(())
}
