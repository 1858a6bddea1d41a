/// Entry classification and metadata extraction.
///
/// Everything here works from `symlink_metadata`, so a symlink is described
/// as the link itself: its own type, its own mode bits, its own times.
use super::timestamp::format_timestamp;
use crate::model::{EntryKind, EntryRecord};
use crate::platform::{entry_mode, filemode, HostCapabilities, StatTimes};
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Build the record for `path`, or `None` if it cannot be stat'ed.
///
/// Failures are logged here and the caller simply skips the entry.
pub fn extract_entry(path: &Path, root: &Path, caps: HostCapabilities) -> Option<EntryRecord> {
    match try_extract_entry(path, root, caps) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!("Cannot lstat {}: {err}", path.display());
            None
        }
    }
}

/// Like [`extract_entry`] but surfaces the stat error, for callers where a
/// failure is fatal (the scan root).
pub fn try_extract_entry(
    path: &Path,
    root: &Path,
    caps: HostCapabilities,
) -> io::Result<EntryRecord> {
    let meta = fs::symlink_metadata(path)?;
    Ok(build_record(path, root, &meta, caps))
}

fn build_record(path: &Path, root: &Path, meta: &Metadata, caps: HostCapabilities) -> EntryRecord {
    let times = StatTimes::from_metadata(meta);
    let file_type = meta.file_type();

    let kind = if file_type.is_dir() {
        EntryKind::Folder
    } else if file_type.is_file() {
        EntryKind::File {
            size_bytes: meta.len(),
            extension: extension_of(path),
        }
    } else if file_type.is_symlink() {
        EntryKind::Symlink {
            symlink_target: read_link_target(path),
        }
    } else {
        EntryKind::Unknown
    };

    EntryRecord {
        path: relative_posix(path, root),
        permissions: filemode(entry_mode(meta)),
        modified_utc: format_timestamp(times.modified),
        accessed_utc: format_timestamp(times.accessed),
        metadata_changed_utc: format_timestamp(times.metadata_changed),
        created_utc: caps.birth_time.then(|| format_timestamp(times.created)),
        kind,
    }
}

/// `path` relative to `root` with `/` separators; `"."` for the root itself.
///
/// Falls back to the absolute form when `path` is not under `root`.
pub fn relative_posix(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => {
            let joined = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if joined.is_empty() {
                ".".to_string()
            } else {
                joined
            }
        }
        Err(_) => {
            debug!("Using absolute path for {}", path.display());
            path.to_string_lossy().replace('\\', "/")
        }
    }
}

/// Lowercased suffix without the dot. `None` for dot-files, names without a
/// dot, and names ending in a dot.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
}

fn read_link_target(path: &Path) -> Option<String> {
    match fs::read_link(path) {
        Ok(target) => Some(target.to_string_lossy().into_owned()),
        Err(err) => {
            warn!("Cannot read symlink target for {}: {err}", path.display());
            None
        }
    }
}
