//! Route tree node types

use std::path::PathBuf;

use serde::Serialize;

/// A node of the route tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RouteNode {
    Leaf(LeafRoute),
    Index(IndexRoute),
    Layout(LayoutRoute),
    Directory(DirectoryRoute),
}

/// An ordinary routable file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafRoute {
    pub id: String,
    pub path: String,
    pub entry_point: PathBuf,
}

/// The `_index` file of a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexRoute {
    pub id: String,
    pub entry_point: PathBuf,
}

/// The `_layout` file of a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutRoute {
    pub id: String,
    pub entry_point: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryRoute {
    pub id: String,
    /// Always `None` for the root.
    pub path: Option<String>,
    pub layout: Option<LayoutRoute>,
    pub index: Option<IndexRoute>,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn id(&self) -> &str {
        match self {
            RouteNode::Leaf(leaf) => &leaf.id,
            RouteNode::Index(index) => &index.id,
            RouteNode::Layout(layout) => &layout.id,
            RouteNode::Directory(dir) => &dir.id,
        }
    }

    /// Route path segment, if the node kind carries one.
    pub fn path(&self) -> Option<&str> {
        match self {
            RouteNode::Leaf(leaf) => Some(&leaf.path),
            RouteNode::Directory(dir) => dir.path.as_deref(),
            RouteNode::Index(_) | RouteNode::Layout(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            RouteNode::Leaf(_) => "leaf",
            RouteNode::Index(_) => "index",
            RouteNode::Layout(_) => "layout",
            RouteNode::Directory(_) => "directory",
        }
    }
}

impl DirectoryRoute {
    /// An empty root directory.
    pub fn root() -> Self {
        Self {
            id: String::new(),
            path: None,
            layout: None,
            index: None,
            children: Vec::new(),
        }
    }

    /// A directory without layout and index only groups and prefixes paths.
    pub fn is_pass_through(&self) -> bool {
        self.layout.is_none() && self.index.is_none()
    }

    /// Nothing routable in or below this directory.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.is_pass_through()
    }
}
