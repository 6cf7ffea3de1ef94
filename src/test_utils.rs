//! Test utilities for creating temporary app roots and in-memory file trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::tree::{DirectoryNode, FileNode, FileTreeNode};

/// A temporary app root for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestApp {
    dir: TempDir,
}

impl TestApp {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file with the given content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an entry point module with a default export.
    pub fn add_entry(&self, path: &str) -> PathBuf {
        self.add_file(path, "export default function Route() {}\n")
    }

    /// Create a directory, including parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Remove a file or a whole directory.
    pub fn remove(&self, path: &Path) {
        if path.is_dir() {
            fs::remove_dir_all(path).expect("Failed to remove dir");
        } else {
            fs::remove_file(path).expect("Failed to remove file");
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an in-memory file tree rooted at `/app` from `/` separated paths.
///
/// Names are inserted as given, without checking that they are entry points.
pub fn file_tree(paths: &[&str]) -> DirectoryNode {
    let mut root = DirectoryNode::root("/app");
    for path in paths {
        let segments: Vec<&str> = path.split('/').collect();
        insert(&mut root, &segments);
    }
    root
}

fn insert(dir: &mut DirectoryNode, segments: &[&str]) {
    match segments {
        [] => {}
        [name] => {
            let file = FileNode::new(dir, name);
            dir.children
                .insert(name.to_string(), FileTreeNode::File(file));
        }
        [name, rest @ ..] => {
            if !dir.children.contains_key(*name) {
                let child = DirectoryNode::child_of(dir, name);
                dir.children
                    .insert(name.to_string(), FileTreeNode::Directory(child));
            }
            match dir.children.get_mut(*name) {
                Some(FileTreeNode::Directory(child)) => insert(child, rest),
                _ => panic!("'{}' is a file and a directory", name),
            }
        }
    }
}
