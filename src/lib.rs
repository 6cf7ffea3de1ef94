//! fsroutes - Route configuration generated from file-system naming conventions

pub mod apps;
pub mod codegen;
pub mod error;
pub mod naming;
pub mod output;
pub mod render;
pub mod route;
pub mod tree;
pub mod watch;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use apps::{AppConfig, AppRoutes, AppsConfig};
pub use codegen::{Program, generate_routes_file};
pub use error::{Result, RouteError};
pub use naming::{FileInfo, parse_file_name};
pub use output::{OutputConfig, OutputFormat, ProgramPrinter, printer_for};
pub use render::{normalize, render_routes};
pub use route::{
    DirectoryRoute, RouteNode, build_route_tree, compress_directories, prune_empty_directories,
};
pub use tree::{DirectoryNode, FileTreeNode, ScanConfig, TreeWalker};
pub use watch::{IncrementalUpdater, RouteWatcher, WatchConfig, WatchEvent};
