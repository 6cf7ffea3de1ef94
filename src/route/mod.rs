//! Route tree construction and normalization
//!
//! A file tree becomes a route tree in three steps:
//!
//! 1. `build_route_tree` classifies every entry as leaf, index, layout or
//!    directory.
//! 2. `prune_empty_directories` drops directories that hold no routes.
//! 3. `compress_directories` splices directories without layout and index
//!    into their parent.
//!
//! Pruning must run before compression, compression relies on every
//! remaining pass-through directory having at least one child.

mod ast;
mod builder;
mod compress;
mod prune;

pub use ast::{DirectoryRoute, IndexRoute, LayoutRoute, LeafRoute, RouteNode};
pub use builder::build_route_tree;
pub use compress::{compress_directories, join_paths};
pub use prune::prune_empty_directories;
