/// ASCII-connector rendering of a [`FileTree`], fenced for Markdown.
use crate::model::{FileTree, NodeIndex};

const FENCE: &str = "```";
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Render `tree` as a fenced code block headed by `[<root name>]/`.
pub fn render_ascii(tree: &FileTree) -> String {
    let mut lines = vec![FENCE.to_string()];
    if let Some(root) = tree.root {
        lines.push(format!("[{}]/", tree.node(root).name));
        push_children(tree, root, "", &mut lines);
    }
    lines.push(FENCE.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_children(tree: &FileTree, dir: NodeIndex, prefix: &str, lines: &mut Vec<String>) {
    let mut children = tree.children(dir).peekable();
    while let Some(child) = children.next() {
        let is_last = children.peek().is_none();
        let node = tree.node(child);
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        let suffix = if node.is_dir { "/" } else { "" };
        lines.push(format!("{prefix}{connector}{}{suffix}", node.name));

        if node.is_dir {
            let continuation = if is_last { SPACE } else { PIPE };
            push_children(tree, child, &format!("{prefix}{continuation}"), lines);
        }
    }
}
