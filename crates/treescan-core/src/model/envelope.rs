/// The top-level scan document.
use super::entry::EntryRecord;
use serde::Serialize;

/// Version of the output schema. Static; there is no migration logic.
pub const SCANNER_OUTPUT_VERSION: &str = "1.0";

/// Wraps the walker output with the scan's identifying metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ScanEnvelope {
    pub scanner_version: String,
    /// Absolute, resolved path of the scan root.
    pub scanned_path: String,
    /// Wall-clock time of the scan, `YYYY-MM-DDTHH:MM:SSZ`.
    pub timestamp_utc: String,
    /// Root record first, then descendants in traversal order.
    pub items: Vec<EntryRecord>,
}

impl ScanEnvelope {
    pub fn new(scanned_path: String, timestamp_utc: String, items: Vec<EntryRecord>) -> Self {
        Self {
            scanner_version: SCANNER_OUTPUT_VERSION.to_string(),
            scanned_path,
            timestamp_utc,
            items,
        }
    }

    /// Number of regular-file records.
    pub fn file_count(&self) -> usize {
        self.items
            .iter()
            .filter(|rec| matches!(rec.kind, super::EntryKind::File { .. }))
            .count()
    }

    /// Sum of `size_bytes` over all file records.
    pub fn total_file_bytes(&self) -> u64 {
        self.items
            .iter()
            .map(|rec| match rec.kind {
                super::EntryKind::File { size_bytes, .. } => size_bytes,
                _ => 0,
            })
            .sum()
    }
}
