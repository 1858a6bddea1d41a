/// Directory tree printers.
///
/// [`build_tree`] walks a directory into a sorted [`FileTree`]; the
/// [`markdown`] and [`ascii`] renderers turn that tree into text. Unlike the
/// metadata scanner, the printers follow symlinks (via `walkdir`): a link to
/// a directory is shown and descended like a directory.
pub mod ascii;
pub mod markdown;

pub use ascii::render_ascii;
pub use markdown::render_markdown;

use crate::model::{FileNode, FileTree, NodeIndex};
use crate::output::root_name;
use crate::scanner::resolve_root;
use crate::Result;
use compact_str::CompactString;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Which text rendering a tree printer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeStyle {
    /// Nested bullet list under a `# Directory Tree for <path>` heading.
    Markdown,
    /// `├──`/`└──` connectors inside a fenced code block.
    Ascii,
}

/// Validate `root`, walk it, and render it in `style`.
///
/// The root is labelled with the name it was given on the command line
/// (falling back to its resolved name), while the Markdown heading shows the
/// fully resolved path.
pub fn render_directory(root: &Path, style: TreeStyle) -> Result<String> {
    let resolved = resolve_root(root)?;
    let tree = build_tree(&resolved, &root_name(root));
    Ok(match style {
        TreeStyle::Markdown => render_markdown(&tree, &resolved),
        TreeStyle::Ascii => render_ascii(&tree),
    })
}

/// Build the display tree for `root`, labelling the root node `label`.
///
/// Children are ordered directories (and anything that is not a regular
/// file) first, then files, each group by case-insensitive name. Links are
/// followed; a directory that loops back to one of its ancestors is shown
/// with no children, and a dangling link is shown as a plain entry.
pub fn build_tree(root: &Path, label: &str) -> FileTree {
    let mut tree = FileTree::with_capacity(1_024);
    let root_idx = tree.add_root(CompactString::new(label));

    // Walk-path of every directory node, so each entry finds its parent.
    let mut dir_map: HashMap<PathBuf, NodeIndex> = HashMap::new();
    dir_map.insert(root.to_path_buf(), root_idx);
    // Children per parent in walk (display) order, linked once at the end.
    let mut ordered: HashMap<NodeIndex, Vec<NodeIndex>> = HashMap::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .min_depth(1)
        .sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));

    for entry_result in walker {
        let (path, is_dir) = match entry_result {
            Ok(entry) => (entry.path().to_path_buf(), entry.file_type().is_dir()),
            Err(err) => match classify_walk_error(&err) {
                Some(placeholder) => placeholder,
                None => continue,
            },
        };

        let Some(parent_idx) = path.parent().and_then(|p| dir_map.get(p)).copied() else {
            debug!("No parent node for {}", path.display());
            continue;
        };

        let name = CompactString::new(
            path.file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default(),
        );
        let idx = if is_dir {
            let idx = tree.add_node(FileNode::new_dir(name, Some(parent_idx)));
            dir_map.insert(path, idx);
            idx
        } else {
            tree.add_node(FileNode::new_file(name, Some(parent_idx)))
        };
        ordered.entry(parent_idx).or_default().push(idx);
    }

    // Head insertion reverses, so link back to front.
    for (parent, children) in ordered {
        for &child in children.iter().rev() {
            tree.add_child(parent, child);
        }
    }
    tree
}

/// Turn a walk error into a node to display, or log it and return `None`.
///
/// Loops become childless directories and dangling links become plain
/// entries. An unreadable directory was already yielded as an entry, so
/// only the warning remains.
fn classify_walk_error(err: &walkdir::Error) -> Option<(PathBuf, bool)> {
    let path = err.path()?.to_path_buf();
    if err.loop_ancestor().is_some() {
        warn!("Not descending into {}: symlink loop", path.display());
        return Some((path, true));
    }
    let dangling = fs::symlink_metadata(&path).is_ok_and(|m| m.file_type().is_symlink())
        && fs::metadata(&path).is_err();
    if dangling && err.depth() > 0 {
        debug!("Dangling symlink {}", path.display());
        return Some((path, false));
    }
    warn!("Cannot read {}: {err}", path.display());
    None
}

/// `(is a regular file after following links, lowercase name, raw name)`.
fn sort_key(entry: &DirEntry) -> (bool, String, String) {
    let is_file = fs::metadata(entry.path()).is_ok_and(|m| m.is_file());
    let name = entry.file_name().to_string_lossy().into_owned();
    (is_file, name.to_lowercase(), name)
}
