/// Recursive `__pycache__` removal.
///
/// Finds every real directory named exactly `__pycache__` under a root and
/// removes it, or only reports it in dry-run mode. Symlinks are never
/// followed or deleted, and a matched directory is not searched further.
use crate::scanner::resolve_root;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Directory name targeted by the cleaner.
pub const PYCACHE_DIR: &str = "__pycache__";

#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Report what would be deleted without touching anything.
    pub dry_run: bool,
}

/// Outcome of a cleaning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Resolved root that was searched.
    pub root: PathBuf,
    /// Every matched directory, in discovery order.
    pub found: Vec<PathBuf>,
    /// Matches that were removed. Always zero in dry-run mode.
    pub deleted: usize,
    /// Matches whose removal failed.
    pub failed: usize,
}

/// Resolve `root` and clean every `__pycache__` directory below it.
///
/// Only an invalid root is an error; a directory that cannot be removed is
/// logged, counted in [`CleanReport::failed`], and skipped.
pub fn clean_pycache(root: &Path, options: CleanOptions) -> Result<CleanReport> {
    let root = resolve_root(root)?;
    info!("Scanning '{}' for {PYCACHE_DIR} folders...", root.display());
    if options.dry_run {
        info!("--- DRY RUN MODE: No files will be deleted. ---");
    }

    let found = find_pycache_dirs(&root);
    let mut report = CleanReport {
        root,
        found: Vec::with_capacity(found.len()),
        ..CleanReport::default()
    };

    for dir in found {
        if options.dry_run {
            info!("[DRY RUN] Would delete: {}", dir.display());
        } else {
            info!("Deleting: {}", dir.display());
            match fs::remove_dir_all(&dir) {
                Ok(()) => report.deleted += 1,
                Err(err) => {
                    warn!("Error deleting {}: {err}. Skipping this folder.", dir.display());
                    report.failed += 1;
                }
            }
        }
        report.found.push(dir);
    }

    Ok(report)
}

/// Every non-symlink directory named `__pycache__` below `root`, in walk
/// order with siblings sorted by name. Unreadable directories are logged and
/// skipped.
pub fn find_pycache_dirs(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry_result) = walker.next() {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Scan error: {err}");
                continue;
            }
        };

        if entry.file_type().is_dir() && entry.file_name() == PYCACHE_DIR {
            found.push(entry.into_path());
            walker.skip_current_dir();
        }
    }

    found
}
