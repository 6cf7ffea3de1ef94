//! Removal of directories that carry no routes

use std::borrow::Cow;

use super::ast::{DirectoryRoute, RouteNode};

/// Recursively remove directories with no children, layout or index.
///
/// Returns `None` when `directory` itself ends up empty. Subtrees where
/// nothing was removed are handed back borrowed, so a tree that is already
/// pruned comes back as `Cow::Borrowed` of the same node.
pub fn prune_empty_directories(directory: &DirectoryRoute) -> Option<Cow<'_, DirectoryRoute>> {
    let mut children: Vec<Cow<'_, RouteNode>> = Vec::with_capacity(directory.children.len());
    let mut modified = false;

    for child in &directory.children {
        match child {
            RouteNode::Directory(dir) => match prune_empty_directories(dir) {
                Some(Cow::Borrowed(_)) => children.push(Cow::Borrowed(child)),
                Some(Cow::Owned(pruned)) => {
                    children.push(Cow::Owned(RouteNode::Directory(pruned)));
                    modified = true;
                }
                None => modified = true,
            },
            RouteNode::Leaf(_) | RouteNode::Index(_) | RouteNode::Layout(_) => {
                children.push(Cow::Borrowed(child))
            }
        }
    }

    if children.is_empty() && directory.is_pass_through() {
        return None;
    }

    if !modified {
        return Some(Cow::Borrowed(directory));
    }

    Some(Cow::Owned(DirectoryRoute {
        id: directory.id.clone(),
        path: directory.path.clone(),
        layout: directory.layout.clone(),
        index: directory.index.clone(),
        children: children.into_iter().map(Cow::into_owned).collect(),
    }))
}
