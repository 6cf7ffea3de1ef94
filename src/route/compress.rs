//! Removal of pass-through directories
//!
//! A directory without layout and index adds nothing but a path prefix. Its
//! children are moved up into the parent at the directory's position, with
//! the prefix folded into their own path. Expects a pruned tree.

use std::borrow::Cow;

use super::ast::{DirectoryRoute, RouteNode};

/// Recursively splice pass-through directories into their parents.
///
/// The root itself is never removed. Unchanged subtrees are handed back
/// borrowed.
pub fn compress_directories(directory: &DirectoryRoute) -> Cow<'_, DirectoryRoute> {
    let mut children: Vec<Cow<'_, RouteNode>> = Vec::with_capacity(directory.children.len());
    let mut modified = false;

    for child in &directory.children {
        let RouteNode::Directory(dir) = child else {
            children.push(Cow::Borrowed(child));
            continue;
        };

        let compressed = compress_directories(dir);
        if compressed.is_pass_through() {
            for grandchild in &compressed.children {
                children.push(Cow::Owned(with_prefix(dir.path.as_deref(), grandchild)));
            }
            modified = true;
        } else if let Cow::Owned(compressed) = compressed {
            children.push(Cow::Owned(RouteNode::Directory(compressed)));
            modified = true;
        } else {
            children.push(Cow::Borrowed(child));
        }
    }

    if !modified {
        return Cow::Borrowed(directory);
    }

    Cow::Owned(DirectoryRoute {
        id: directory.id.clone(),
        path: directory.path.clone(),
        layout: directory.layout.clone(),
        index: directory.index.clone(),
        children: children.into_iter().map(Cow::into_owned).collect(),
    })
}

/// Copy of `node` with `prefix` prepended to its path.
fn with_prefix(prefix: Option<&str>, node: &RouteNode) -> RouteNode {
    match node {
        RouteNode::Leaf(leaf) => {
            let mut leaf = leaf.clone();
            leaf.path = join_paths(prefix, Some(&leaf.path)).unwrap_or_default();
            RouteNode::Leaf(leaf)
        }
        RouteNode::Directory(dir) => {
            let mut dir = dir.clone();
            dir.path = join_paths(prefix, dir.path.as_deref());
            RouteNode::Directory(dir)
        }
        // No path to rewrite
        RouteNode::Index(_) | RouteNode::Layout(_) => node.clone(),
    }
}

/// Join two route paths with `/`, skipping absent or empty sides.
pub fn join_paths(parent: Option<&str>, child: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [parent, child]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
