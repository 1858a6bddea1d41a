/// Arena-backed display tree.
///
/// All nodes live in a single `Vec<FileNode>`. Relationships between nodes
/// use `NodeIndex` rather than heap pointers. Sibling order is the display
/// order: the builder inserts children in reverse so that the O(1)
/// head-insertion of [`FileTree::add_child`] leaves them sorted.
use super::file_node::{FileNode, NodeIndex};
use compact_str::CompactString;

#[derive(Debug, Clone)]
pub struct FileTree {
    /// Arena: every node in a flat vector.
    pub nodes: Vec<FileNode>,

    /// The scanned directory. Always index 0 once a root has been added.
    pub root: Option<NodeIndex>,
}

impl FileTree {
    /// Create an empty tree with pre-allocated capacity.
    pub fn with_capacity(estimated_nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(estimated_nodes),
            root: None,
        }
    }

    /// Allocate a new node in the arena and return its index.
    pub fn add_node(&mut self, node: FileNode) -> NodeIndex {
        let idx = NodeIndex::new(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    /// Add the root directory to the tree.
    pub fn add_root(&mut self, name: CompactString) -> NodeIndex {
        let idx = self.add_node(FileNode::new_dir(name, None));
        self.root = Some(idx);
        idx
    }

    /// Attach `child` as a child of `parent`, prepending to the sibling list.
    pub fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        let old_first = self.nodes[parent.idx()].first_child;
        self.nodes[child.idx()].next_sibling = old_first;
        self.nodes[child.idx()].parent = Some(parent);
        self.nodes[parent.idx()].first_child = Some(child);
    }

    pub fn node(&self, idx: NodeIndex) -> &FileNode {
        &self.nodes[idx.idx()]
    }

    /// Iterate the children of `idx` in display order.
    pub fn children(&self, idx: NodeIndex) -> Children<'_> {
        Children {
            tree: self,
            next: self.nodes[idx.idx()].first_child,
        }
    }
}

/// Iterator over a node's children, following the sibling links.
pub struct Children<'a> {
    tree: &'a FileTree,
    next: Option<NodeIndex>,
}

impl Iterator for Children<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let current = self.next?;
        self.next = self.tree.node(current).next_sibling;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_child_prepends() {
        let mut tree = FileTree::with_capacity(3);
        let root = tree.add_root(CompactString::new("root"));
        let a = tree.add_node(FileNode::new_file(CompactString::new("a"), None));
        let b = tree.add_node(FileNode::new_file(CompactString::new("b"), None));
        tree.add_child(root, a);
        tree.add_child(root, b);

        let names: Vec<&str> = tree
            .children(root)
            .map(|i| tree.node(i).name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(tree.node(a).parent, Some(root));
    }

    #[test]
    fn nested_child_links_to_its_parent() {
        let mut tree = FileTree::with_capacity(3);
        let root = tree.add_root(CompactString::new("project"));
        let src = tree.add_node(FileNode::new_dir(CompactString::new("src"), None));
        tree.add_child(root, src);
        let main = tree.add_node(FileNode::new_file(CompactString::new("main.rs"), None));
        tree.add_child(src, main);

        assert_eq!(tree.root, Some(root));
        assert_eq!(tree.node(main).parent, Some(src));
        assert_eq!(tree.node(src).parent, Some(root));
        assert!(tree.node(src).is_dir);
        assert_eq!(tree.children(src).collect::<Vec<_>>(), vec![main]);
        assert_eq!(tree.children(main).count(), 0);
    }

    #[test]
    fn empty_tree_has_no_root() {
        let tree = FileTree::with_capacity(0);
        assert!(tree.nodes.is_empty());
        assert!(tree.root.is_none());
    }
}
