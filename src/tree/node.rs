//! File tree nodes produced by the walker and edited by the updater

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// A routable file or a directory on the way to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileTreeNode {
    File(FileNode),
    Directory(DirectoryNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNode {
    /// Path relative to the app root, `/` separated.
    pub id: String,
    pub path: PathBuf,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryNode {
    /// Path relative to the app root, empty for the root itself.
    pub id: String,
    pub path: PathBuf,
    pub name: String,
    /// Entries keyed by name. Iteration order is the enumeration order.
    pub children: BTreeMap<String, FileTreeNode>,
}

impl FileTreeNode {
    pub fn id(&self) -> &str {
        match self {
            FileTreeNode::File(file) => &file.id,
            FileTreeNode::Directory(dir) => &dir.id,
        }
    }
}

impl FileNode {
    pub fn new(parent: &DirectoryNode, name: &str) -> Self {
        Self {
            id: child_id(&parent.id, name),
            path: parent.path.join(name),
            name: name.to_string(),
        }
    }
}

impl DirectoryNode {
    /// An empty directory node for an app root.
    pub fn root(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        Self {
            id: String::new(),
            path,
            name,
            children: BTreeMap::new(),
        }
    }

    /// An empty directory node nested under `parent`.
    pub fn child_of(parent: &DirectoryNode, name: &str) -> Self {
        Self {
            id: child_id(&parent.id, name),
            path: parent.path.join(name),
            name: name.to_string(),
            children: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// All files below this directory, in enumeration order.
    pub fn files(&self) -> Vec<&FileNode> {
        let mut files = Vec::new();
        self.collect_files(&mut files);
        files
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a FileNode>) {
        for child in self.children.values() {
            match child {
                FileTreeNode::File(file) => out.push(file),
                FileTreeNode::Directory(dir) => dir.collect_files(out),
            }
        }
    }
}

/// Join a relative id with a child name.
pub fn child_id(parent_id: &str, name: &str) -> String {
    if parent_id.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent_id, name)
    }
}
