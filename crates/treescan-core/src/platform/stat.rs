/// Link-aware stat timestamps and host capability detection.
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

/// What the host's metadata interface can report. Decided once per scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// The host exposes a creation (birth) time.
    pub birth_time: bool,
}

impl HostCapabilities {
    /// Probe the metadata interface using `probe` (normally the scan root).
    ///
    /// An `Unsupported` error from `Metadata::created` means the platform or
    /// filesystem has no birth time at all. Any other probe failure falls
    /// back to the compile-time platform default.
    pub fn detect(probe: &Path) -> Self {
        let birth_time = match fs::symlink_metadata(probe).and_then(|meta| meta.created()) {
            Ok(_) => true,
            Err(err) if err.kind() == io::ErrorKind::Unsupported => false,
            Err(err) => {
                debug!("Birth-time probe on {} failed: {err}", probe.display());
                Self::platform_default().birth_time
            }
        };
        Self { birth_time }
    }

    /// Platforms whose stat structure carries a birth-time field.
    pub fn platform_default() -> Self {
        Self {
            birth_time: cfg!(any(
                target_os = "macos",
                target_os = "ios",
                target_os = "freebsd",
                target_os = "netbsd",
                target_os = "openbsd",
                target_os = "windows"
            )),
        }
    }
}

/// Raw epoch-second timestamps of one entry. `None` where the host call failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatTimes {
    pub modified: Option<i64>,
    pub accessed: Option<i64>,
    pub metadata_changed: Option<i64>,
    pub created: Option<i64>,
}

impl StatTimes {
    #[cfg(unix)]
    pub fn from_metadata(meta: &Metadata) -> Self {
        Self {
            modified: Some(meta.mtime()),
            accessed: Some(meta.atime()),
            metadata_changed: Some(meta.ctime()),
            created: meta.created().ok().map(epoch_seconds),
        }
    }

    /// Without a Unix `ctime`, the change time falls back to the creation
    /// time, which is what the Windows stat layer reports in that slot.
    #[cfg(not(unix))]
    pub fn from_metadata(meta: &Metadata) -> Self {
        let created = meta.created().ok().map(epoch_seconds);
        Self {
            modified: meta.modified().ok().map(epoch_seconds),
            accessed: meta.accessed().ok().map(epoch_seconds),
            metadata_changed: created,
            created,
        }
    }
}

/// Whole seconds since the Unix epoch, floored (pre-epoch times round
/// towards negative infinity, matching `st_mtime` semantics).
pub fn epoch_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() > 0 {
                -secs - 1
            } else {
                -secs
            }
        }
    }
}
