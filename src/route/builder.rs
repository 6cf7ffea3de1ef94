//! Conversion of a file tree into a route tree

use tracing::trace;

use crate::error::{Result, RouteError, SpecialFileKind};
use crate::naming::{INDEX_NAME, LAYOUT_NAME, parse_file_name};
use crate::tree::{DirectoryNode, FileNode, FileTreeNode};

use super::ast::{DirectoryRoute, IndexRoute, LayoutRoute, LeafRoute, RouteNode};

/// Build the route tree for an app root.
///
/// The root never gets a path of its own. Fails when a directory holds two
/// files for the same reserved role.
pub fn build_route_tree(root: &DirectoryNode) -> Result<DirectoryRoute> {
    let mut route = build_directory(root)?;
    route.id = String::new();
    route.path = None;
    Ok(route)
}

fn build_directory(dir: &DirectoryNode) -> Result<DirectoryRoute> {
    let mut route = DirectoryRoute {
        id: dir.id.clone(),
        path: parse_file_name(&dir.name).route_path,
        layout: None,
        index: None,
        children: Vec::new(),
    };

    for child in dir.children.values() {
        let node = match child {
            FileTreeNode::File(file) => match file_route(file) {
                Some(node) => node,
                None => continue,
            },
            FileTreeNode::Directory(sub) => RouteNode::Directory(build_directory(sub)?),
        };

        match node {
            RouteNode::Layout(layout) => {
                if let Some(existing) = &route.layout {
                    return Err(duplicate(SpecialFileKind::Layout, dir, &existing.id, &layout.id));
                }
                route.layout = Some(layout);
            }
            RouteNode::Index(index) => {
                if let Some(existing) = &route.index {
                    return Err(duplicate(SpecialFileKind::Index, dir, &existing.id, &index.id));
                }
                route.index = Some(index);
            }
            RouteNode::Leaf(_) | RouteNode::Directory(_) => route.children.push(node),
        }
    }

    Ok(route)
}

/// Classify a file, `None` for reserved names that are not routes.
fn file_route(file: &FileNode) -> Option<RouteNode> {
    let info = parse_file_name(&file.name);
    match info.name.as_str() {
        LAYOUT_NAME => Some(RouteNode::Layout(LayoutRoute {
            id: file.id.clone(),
            entry_point: file.path.clone(),
        })),
        INDEX_NAME => Some(RouteNode::Index(IndexRoute {
            id: file.id.clone(),
            entry_point: file.path.clone(),
        })),
        _ => match info.route_path {
            Some(path) => Some(RouteNode::Leaf(LeafRoute {
                id: file.id.clone(),
                path,
                entry_point: file.path.clone(),
            })),
            None => {
                trace!(id = %file.id, "skipping reserved entry point");
                None
            }
        },
    }
}

fn duplicate(kind: SpecialFileKind, dir: &DirectoryNode, first: &str, second: &str) -> RouteError {
    RouteError::DuplicateSpecialFile {
        kind,
        directory: if dir.id.is_empty() {
            ".".to_string()
        } else {
            dir.id.clone()
        },
        first: first.to_string(),
        second: second.to_string(),
    }
}
