/// Per-entry metadata records.
///
/// The record is split into the fields every entry carries and an
/// [`EntryKind`] variant that owns the type-specific fields. The variant is
/// flattened into the record on serialisation, so a folder record can never
/// carry `size_bytes` and a file record can never carry `symlink_target`.
use serde::Serialize;

/// Classification of a scanned entry, with the fields that only apply to
/// that classification.
///
/// Serialises as an internally tagged map: `{"type": "file", "size_bytes": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File {
        /// Raw byte count from the link-aware stat.
        size_bytes: u64,
        /// Lowercased suffix without the leading dot, `None` when the name
        /// has no suffix.
        extension: Option<String>,
    },
    Symlink {
        /// Raw link target as stored in the link, possibly relative or
        /// dangling. `None` when the target could not be read.
        symlink_target: Option<String>,
    },
    Unknown,
}

impl EntryKind {
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder)
    }
}

/// Metadata for a single filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    /// Root-relative path with `/` separators. The scan root is `"."`.
    pub path: String,

    /// `ls -l` style mode string of the entry itself (never its link target).
    pub permissions: String,

    pub modified_utc: Option<String>,
    pub accessed_utc: Option<String>,
    pub metadata_changed_utc: Option<String>,

    /// Outer `None`: the host does not expose creation time and the key is
    /// omitted. `Some(None)`: the host supports it but this entry's value
    /// could not be read or represented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_utc: Option<Option<String>>,

    #[serde(flatten)]
    pub kind: EntryKind,
}
