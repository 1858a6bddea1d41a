/// A single node in the arena-allocated display tree.
///
/// Nodes are stored in a flat `Vec<FileNode>`. Parent-child relationships use
/// indices rather than pointers, so the tree printers can walk it without
/// any reference counting.
use compact_str::CompactString;

/// Lightweight index into the arena `Vec<FileNode>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Create a new `NodeIndex` from a `usize`.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "NodeIndex overflow");
        Self(index as u32)
    }

    /// Return the index as a `usize` for Vec indexing.
    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A file or directory as shown by the tree printers.
#[derive(Debug, Clone)]
pub struct FileNode {
    /// Entry name only (NOT the full path).
    pub name: CompactString,

    /// `true` if the entry is a directory, following symlinks.
    pub is_dir: bool,

    /// Index of the parent node. `None` for the tree root.
    pub parent: Option<NodeIndex>,

    /// First child (directories only). Children form a singly-linked list
    /// via [`next_sibling`](Self::next_sibling), in display order.
    pub first_child: Option<NodeIndex>,

    /// Next sibling under the same parent.
    pub next_sibling: Option<NodeIndex>,
}

impl FileNode {
    pub fn new_file(name: CompactString, parent: Option<NodeIndex>) -> Self {
        Self {
            name,
            is_dir: false,
            parent,
            first_child: None,
            next_sibling: None,
        }
    }

    pub fn new_dir(name: CompactString, parent: Option<NodeIndex>) -> Self {
        Self {
            name,
            is_dir: true,
            parent,
            first_child: None,
            next_sibling: None,
        }
    }
}
