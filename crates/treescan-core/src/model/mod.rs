/// Data model for treescan.
///
/// - [`EntryRecord`] / [`EntryKind`]: one metadata record per scanned entry.
/// - [`ScanEnvelope`]: the top-level JSON document wrapping those records.
/// - [`FileTree`]: an arena-allocated, sorted tree used by the tree printers.
pub mod entry;
pub mod envelope;
pub mod file_node;
pub mod file_tree;

pub use entry::{EntryKind, EntryRecord};
pub use envelope::{ScanEnvelope, SCANNER_OUTPUT_VERSION};
pub use file_node::{FileNode, NodeIndex};
pub use file_tree::FileTree;
