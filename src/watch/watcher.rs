//! Filesystem watching for app roots
//!
//! A notify watcher feeds raw events into a channel. Events are collected in
//! debounced batches, translated, and applied to the owning app in arrival
//! order. Each batch reports the apps whose trees changed.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, trace, warn};

use crate::apps::AppRoutes;
use crate::error::Result;

use super::event::{WatchEvent, translate_event};

/// Configuration for watch mode.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Quiet period that closes a batch of events.
    pub debounce: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(100),
        }
    }
}

/// Watches every app root and applies changes to `apps`.
pub struct RouteWatcher<'a> {
    apps: &'a AppRoutes,
    config: WatchConfig,
    events: Receiver<notify::Result<Event>>,
    // Dropping the watcher stops event delivery
    _watcher: RecommendedWatcher,
}

impl<'a> RouteWatcher<'a> {
    pub fn new(apps: &'a AppRoutes, config: WatchConfig) -> Result<Self> {
        let (tx, events) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;

        for name in apps.names() {
            let root = apps.root(name)?;
            watcher.watch(root, RecursiveMode::Recursive)?;
            info!(app = name, root = %root.display(), "watching");
        }

        Ok(Self {
            apps,
            config,
            events,
            _watcher: watcher,
        })
    }

    /// Block until the next batch of events and apply it.
    ///
    /// Returns the names of the apps that changed, or `None` once the event
    /// source is gone.
    pub fn next_changes(&self) -> Option<BTreeSet<String>> {
        let first = self.events.recv().ok()?;
        let mut batch = vec![first];

        loop {
            match self.events.recv_timeout(self.config.debounce) {
                Ok(event) => batch.push(event),
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        debug!(events = batch.len(), "processing event batch");
        Some(process_events(self.apps, batch))
    }

    /// Apply batches until the event source is gone, calling `on_change` for
    /// every app whose routes changed. Callback errors are logged and the
    /// loop keeps running.
    pub fn run<F>(&self, mut on_change: F)
    where
        F: FnMut(&str) -> Result<()>,
    {
        while let Some(changed) = self.next_changes() {
            for name in &changed {
                if let Err(e) = on_change(name) {
                    warn!(app = %name, error = %e, "failed to regenerate routes");
                }
            }
        }
    }
}

/// Apply a batch of raw events in order.
pub(crate) fn process_events(
    apps: &AppRoutes,
    batch: Vec<notify::Result<Event>>,
) -> BTreeSet<String> {
    let mut changed = BTreeSet::new();

    for event in batch {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "watch error");
                continue;
            }
        };

        for (path, kind) in translate_event(&event) {
            let expanded = match kind {
                WatchEvent::Create => created_files(apps, path),
                WatchEvent::Delete | WatchEvent::Update => vec![path],
            };

            for path in expanded {
                match apps.apply(&path, kind) {
                    Ok(Some(name)) => {
                        trace!(app = name, path = %path.display(), "routes changed");
                        changed.insert(name.to_string());
                    }
                    Ok(None) => {}
                    Err(e) => warn!(path = %path.display(), error = %e, "ignoring event"),
                }
            }
        }
    }

    changed
}

/// Files a create event adds, filtered the way the scanner filters entries.
///
/// Symlinks and special files are dropped. A directory moved or copied in
/// arrives as a single create and is expanded by scanning it.
fn created_files(apps: &AppRoutes, path: PathBuf) -> Vec<PathBuf> {
    let file_type = match fs::symlink_metadata(&path) {
        Ok(metadata) => metadata.file_type(),
        Err(e) => {
            trace!(path = %path.display(), error = %e, "created path is gone");
            return Vec::new();
        }
    };

    if file_type.is_file() {
        return vec![path];
    }
    if !file_type.is_dir() {
        trace!(path = %path.display(), "skipping symlink or special file");
        return Vec::new();
    }

    match apps.walker().scan(&path) {
        Ok(dir) => dir.files().into_iter().map(|f| f.path.clone()).collect(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to scan created directory");
            Vec::new()
        }
    }
}
