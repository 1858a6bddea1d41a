//! dirtree-md: write a directory tree as a nested Markdown list.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use treescan::cli::exit_on_error;
use treescan::logging::init_logging;
use treescan_core::output::{write_text, OutputTarget, TREE_SUFFIX};
use treescan_core::tree::{render_directory, TreeStyle};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate a Markdown tree of a directory structure",
    long_about = None
)]
struct Args {
    /// Path to the directory to analyze
    directory: PathBuf,

    /// Output Markdown file path [default: <directory_name>_tree.md]
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
    let content = render_directory(&args.directory, TreeStyle::Markdown)?;
    let target = OutputTarget::from_arg(args.output.as_deref(), &args.directory, TREE_SUFFIX);
    write_text(&content, &target)?;
    info!("Markdown file written to '{}'", target.describe());
    Ok(())
}
