/// Markdown bullet-list rendering of a [`FileTree`].
use crate::model::{FileTree, NodeIndex};
use std::path::Path;

/// Render `tree` as a Markdown document headed by the resolved root path.
///
/// Directories are bold with a trailing slash; each level indents two spaces.
pub fn render_markdown(tree: &FileTree, resolved_root: &Path) -> String {
    let mut lines = Vec::new();
    if let Some(root) = tree.root {
        push_lines(tree, root, "", &mut lines);
    }

    let mut out = format!("# Directory Tree for {}\n", resolved_root.display());
    out.push_str(&lines.join("\n"));
    out.push('\n');
    out
}

fn push_lines(tree: &FileTree, dir: NodeIndex, prefix: &str, lines: &mut Vec<String>) {
    for child in tree.children(dir) {
        let node = tree.node(child);
        if node.is_dir {
            lines.push(format!("{prefix}- **{}/**", node.name));
            push_lines(tree, child, &format!("{prefix}  "), lines);
        } else {
            lines.push(format!("{prefix}- {}", node.name));
        }
    }
}
