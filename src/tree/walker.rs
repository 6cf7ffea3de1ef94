//! TreeWalker - scans an app root into a file tree of entry points

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{Result, RouteError};
use crate::naming::is_routable_file;

use super::config::ScanConfig;
use super::node::{DirectoryNode, FileNode, FileTreeNode};
use super::utils::should_ignore_name;

/// Kind of a listed directory entry. Symlinks and other special files are
/// never listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
}

/// Tree walker that builds the file tree of an app in memory.
///
/// Only entry point files are recorded, and directories without any entry
/// point below them are left out. The root is always returned, even if empty.
pub struct TreeWalker {
    config: ScanConfig,
}

impl TreeWalker {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `root` recursively.
    pub fn scan(&self, root: &Path) -> Result<DirectoryNode> {
        let metadata = fs::metadata(root).map_err(|e| RouteError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(RouteError::NotADirectory(root.to_path_buf()));
        }

        let mut node = DirectoryNode::root(root);
        match self.config.parallel_workers {
            1 => self.scan_dir(&mut node, false)?,
            // Auto-detect: use rayon's default thread pool
            0 => self.scan_dir(&mut node, true)?,
            workers => match rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
            {
                Ok(pool) => pool.install(|| self.scan_dir(&mut node, true))?,
                Err(e) => {
                    // Fall back to rayon's global pool if custom pool creation fails
                    debug!(error = %e, "failed to build scan thread pool");
                    self.scan_dir(&mut node, true)?
                }
            },
        }

        debug!(
            root = %root.display(),
            entry_points = node.files().len(),
            "scanned app root"
        );
        Ok(node)
    }

    fn scan_dir(&self, dir: &mut DirectoryNode, parallel: bool) -> Result<()> {
        let mut subdirs = Vec::new();

        for (name, kind) in self.read_entries(&dir.path)? {
            match kind {
                EntryKind::File => {
                    if is_routable_file(&name) {
                        let file = FileNode::new(dir, &name);
                        trace!(id = %file.id, "found entry point");
                        dir.children.insert(name, FileTreeNode::File(file));
                    }
                }
                EntryKind::Dir => subdirs.push(DirectoryNode::child_of(dir, &name)),
            }
        }

        // Sibling directories write disjoint branches, collect keeps listing order
        let scanned: Vec<Result<DirectoryNode>> = if parallel {
            subdirs
                .into_par_iter()
                .map(|mut sub| self.scan_dir(&mut sub, true).map(|_| sub))
                .collect()
        } else {
            subdirs
                .into_iter()
                .map(|mut sub| self.scan_dir(&mut sub, false).map(|_| sub))
                .collect()
        };

        for sub in scanned {
            let sub = sub?;
            // Skip directories without entry points
            if !sub.is_empty() {
                dir.children
                    .insert(sub.name.clone(), FileTreeNode::Directory(sub));
            }
        }

        Ok(())
    }

    /// Read, filter and sort the entries of one directory.
    fn read_entries(&self, path: &Path) -> Result<Vec<(String, EntryKind)>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path).map_err(|e| RouteError::io(path, e))? {
            let entry = entry.map_err(|e| RouteError::io(path, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| RouteError::io(entry.path(), e))?;

            // Skip symlinks to prevent loops and escaping the app root
            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                continue;
            };

            let name = entry.file_name().to_string_lossy().to_string();
            if should_ignore_name(&name, &self.config.ignore_patterns) {
                continue;
            }
            entries.push((name, kind));
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }
}
