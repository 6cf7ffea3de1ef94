//! In-place maintenance of an app's file tree
//!
//! Applying a create or delete event edits the tree directly instead of
//! rescanning. The tree after any sequence of events is the tree a fresh
//! scan of the same filesystem state would produce: only entry point files
//! are recorded, and a directory exists exactly as long as something is
//! recorded below it.

use std::path::{Component, Path, PathBuf};

use tracing::{trace, warn};

use crate::error::{Result, RouteError};
use crate::naming::is_routable_file;
use crate::tree::{DirectoryNode, FileNode, FileTreeNode, ScanConfig, TreeWalker, should_ignore_name};

use super::event::WatchEvent;

/// Owner of one app's file tree.
#[derive(Debug, Clone)]
pub struct IncrementalUpdater {
    tree: DirectoryNode,
    ignore_patterns: Vec<String>,
}

impl IncrementalUpdater {
    /// Wrap a tree produced by a scan with the same configuration.
    pub fn new(tree: DirectoryNode, config: &ScanConfig) -> Self {
        Self {
            tree,
            ignore_patterns: config.ignore_patterns.clone(),
        }
    }

    /// Scan `root` and start tracking it.
    pub fn scan(root: &Path, config: &ScanConfig) -> Result<Self> {
        let tree = TreeWalker::new(config.clone()).scan(root)?;
        Ok(Self::new(tree, config))
    }

    pub fn tree(&self) -> &DirectoryNode {
        &self.tree
    }

    /// Copy of the current tree, for rendering without holding on to `self`.
    pub fn snapshot(&self) -> DirectoryNode {
        self.tree.clone()
    }

    /// Apply one event. Returns whether the tree changed.
    ///
    /// Updates, paths outside the root, ignored names and files that are not
    /// entry points leave the tree alone. Fails only for paths that escape
    /// through `..`, in which case nothing is modified.
    pub fn apply(&mut self, path: &Path, event: WatchEvent) -> Result<bool> {
        let Some(segments) = self.segments(path)? else {
            return Ok(false);
        };

        let changed = match event {
            WatchEvent::Create => {
                let Some(name) = segments.last() else {
                    return Ok(false);
                };
                if !is_routable_file(name) {
                    return Ok(false);
                }
                insert_file(&mut self.tree, &segments)
            }
            WatchEvent::Delete => remove_entry(&mut self.tree, &segments),
            WatchEvent::Update => false,
        };

        trace!(path = %path.display(), ?event, changed, "applied event");
        Ok(changed)
    }

    /// Split `path` into names below the root. `None` when the event does
    /// not concern this tree.
    fn segments(&self, path: &Path) -> Result<Option<Vec<String>>> {
        let Ok(relative) = path.strip_prefix(&self.tree.path) else {
            return Ok(None);
        };

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => segments.push(name.to_string_lossy().to_string()),
                Component::CurDir => continue,
                _ => return Err(RouteError::InvalidEventPath(PathBuf::from(path))),
            }
        }

        if segments.is_empty()
            || segments
                .iter()
                .any(|name| should_ignore_name(name, &self.ignore_patterns))
        {
            return Ok(None);
        }

        Ok(Some(segments))
    }
}

/// Insert a file at `segments`, creating missing directories on the way.
fn insert_file(dir: &mut DirectoryNode, segments: &[String]) -> bool {
    let Some((name, rest)) = segments.split_first() else {
        return false;
    };

    if rest.is_empty() {
        if dir.children.contains_key(name) {
            return false;
        }
        let file = FileNode::new(dir, name);
        dir.children.insert(name.clone(), FileTreeNode::File(file));
        return true;
    }

    let created = match dir.children.get(name) {
        Some(FileTreeNode::Directory(_)) => false,
        Some(FileTreeNode::File(stale)) => {
            // A file cannot sit where a directory now has children
            warn!(id = %stale.id, "replacing file with directory for created path");
            true
        }
        None => true,
    };
    if created {
        let child = DirectoryNode::child_of(dir, name);
        dir.children
            .insert(name.clone(), FileTreeNode::Directory(child));
    }

    match dir.children.get_mut(name) {
        Some(FileTreeNode::Directory(child)) => insert_file(child, rest) || created,
        _ => created,
    }
}

/// Remove the entry at `segments` and any directory left empty by it.
fn remove_entry(dir: &mut DirectoryNode, segments: &[String]) -> bool {
    let Some((name, rest)) = segments.split_first() else {
        return false;
    };

    if rest.is_empty() {
        return dir.children.remove(name).is_some();
    }

    let Some(FileTreeNode::Directory(child)) = dir.children.get_mut(name) else {
        return false;
    };
    let removed = remove_entry(child, rest);
    if removed && child.is_empty() {
        dir.children.remove(name);
    }
    removed
}
