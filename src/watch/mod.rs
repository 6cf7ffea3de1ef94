//! Incremental maintenance of app file trees
//!
//! - `event` - Translation of notify events into create/delete/update
//! - `updater` - In-place edits of a file tree
//! - `watcher` - Debounced watch loop over all app roots

mod event;
mod updater;
mod watcher;

pub use event::{WatchEvent, translate_event};
pub use updater::IncrementalUpdater;
pub use watcher::{RouteWatcher, WatchConfig};
