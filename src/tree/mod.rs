//! File tree scanning
//!
//! The walker turns an app root into a `DirectoryNode` holding every entry
//! point file and the directories leading to them. This is the tree the
//! incremental updater keeps current and the route passes read from.

mod config;
mod node;
mod utils;
mod walker;

// Re-export public types
pub use config::ScanConfig;
pub use node::{DirectoryNode, FileNode, FileTreeNode, child_id};
pub use utils::{glob_match, should_ignore_name};
pub use walker::TreeWalker;
