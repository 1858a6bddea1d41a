/// Sequential worklist walker.
///
/// Directories are kept on an explicit stack rather than traversed by
/// recursion. Each directory's children are listed, sorted by raw file
/// name, filtered, and emitted before any of its subdirectories are opened,
/// so the output is a pre-order of directories with each directory's
/// children grouped together. Symlinked directories are reported but never
/// entered.
use super::metadata::{extract_entry, try_extract_entry};
use super::ScanOptions;
use crate::error::ScanError;
use crate::model::EntryRecord;
use crate::platform::HostCapabilities;
use crate::Result;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Walk `root` and return the root record followed by every visible
/// descendant.
///
/// Only a failure to stat the root itself is fatal; every per-entry failure
/// is logged and the entry skipped.
pub fn walk(
    root: &Path,
    options: ScanOptions,
    caps: HostCapabilities,
) -> Result<Vec<EntryRecord>> {
    let mut items = Vec::new();

    let mut root_record =
        try_extract_entry(root, root, caps).map_err(|source| ScanError::RootInaccessible {
            path: root.to_path_buf(),
            source,
        })?;
    root_record.path = ".".to_string();
    items.push(root_record);

    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let children = match sorted_children(&dir) {
            Ok(children) => children,
            Err(err) => {
                warn!("Cannot read directory {}: {err}", dir.display());
                continue;
            }
        };

        let mut subdirs = Vec::new();
        for child in children {
            if !options.include_hidden {
                if let Ok(rel) = child.strip_prefix(root) {
                    if is_hidden(rel) {
                        debug!("Skipping hidden {}", child.display());
                        continue;
                    }
                }
            }

            let Some(record) = extract_entry(&child, root, caps) else {
                continue;
            };
            if record.kind.is_folder() {
                subdirs.push(child);
            }
            items.push(record);
        }

        // Reverse so the first subdirectory is popped first.
        pending.extend(subdirs.into_iter().rev());
    }

    Ok(items)
}

/// `true` if any segment of the root-relative path starts with a dot.
///
/// Checking every segment, not just the last, means a hidden directory hides
/// its whole subtree.
pub fn is_hidden(rel: &Path) -> bool {
    rel.components().any(|component| match component {
        Component::Normal(segment) => segment.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

/// Immediate children of `dir`, sorted by file name.
fn sorted_children(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        match entry {
            Ok(entry) => children.push(entry.path()),
            Err(err) => warn!("Cannot read entry in {}: {err}", dir.display()),
        }
    }
    children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(children)
}
