/// Scanner module: link-aware metadata extraction over a directory tree.
///
/// The pipeline is strictly sequential:
/// 1. [`resolve_root`] validates the command-line root and resolves it.
/// 2. [`HostCapabilities::detect`] decides once whether creation times exist.
/// 3. [`walker::walk`] emits one [`EntryRecord`] per visible entry.
/// 4. [`scan`] wraps the records in a [`ScanEnvelope`].
pub mod metadata;
pub mod timestamp;
pub mod walker;

use crate::error::ScanError;
use crate::model::{EntryRecord, ScanEnvelope};
use crate::platform::HostCapabilities;
use crate::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Knobs for a single scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Include entries with any dot-prefixed path segment.
    pub include_hidden: bool,
}

/// Validate a root path supplied on the command line and resolve it to an
/// absolute, symlink-free path.
///
/// A symlink that resolves to a directory is accepted with a warning.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let link_meta = fs::symlink_metadata(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ScanError::NotFound(path.to_path_buf())
        } else {
            ScanError::RootInaccessible {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            if link_meta.file_type().is_symlink() {
                warn!("Root is a symlink to a directory: {}", path.display());
            }
        }
        _ => return Err(ScanError::NotADirectory(path.to_path_buf())),
    }

    fs::canonicalize(path).map_err(|source| ScanError::RootInaccessible {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan an already-resolved directory and return its records, root first.
pub fn scan_directory(root: &Path, options: ScanOptions) -> Result<Vec<EntryRecord>> {
    let caps = HostCapabilities::detect(root);
    debug!("Host capabilities: {caps:?}");
    walker::walk(root, options, caps)
}

/// Resolve `root`, scan it, and wrap the result in a [`ScanEnvelope`].
pub fn scan(root: &Path, options: ScanOptions) -> Result<ScanEnvelope> {
    let root = resolve_root(root)?;
    info!(
        "Scanning {} (include_hidden={})",
        root.display(),
        options.include_hidden
    );

    let start = Instant::now();
    let items = scan_directory(&root, options)?;
    debug!("Collected {} records in {:?}", items.len(), start.elapsed());

    Ok(ScanEnvelope::new(
        root.to_string_lossy().into_owned(),
        timestamp::now_utc(),
        items,
    ))
}
