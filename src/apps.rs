//! Registry of apps, each an independently watched route root
//!
//! Every app owns its file tree behind its own lock, so events for one app
//! never wait on another. Rendering copies the tree under the lock and runs
//! the pipeline outside it.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::codegen::Program;
use crate::error::{Result, RouteError};
use crate::render::render_routes;
use crate::tree::{DirectoryNode, ScanConfig, TreeWalker};
use crate::watch::{IncrementalUpdater, WatchEvent};

/// One named route root.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub root: PathBuf,
}

/// Configuration for a set of apps sharing one scan configuration.
#[derive(Debug, Clone, Default)]
pub struct AppsConfig {
    pub apps: Vec<AppConfig>,
    pub scan: ScanConfig,
}

struct App {
    name: String,
    root: PathBuf,
    updater: Mutex<IncrementalUpdater>,
}

/// Scanned apps, ready to receive events and render.
pub struct AppRoutes {
    apps: Vec<App>,
    walker: TreeWalker,
}

impl AppRoutes {
    /// Scan every configured app root. Fails with `NoApps` for an empty
    /// configuration, or with the first scan error.
    pub fn scan(config: AppsConfig) -> Result<Self> {
        if config.apps.is_empty() {
            return Err(RouteError::NoApps);
        }

        let walker = TreeWalker::new(config.scan.clone());
        let apps = config
            .apps
            .into_par_iter()
            .map(|app| {
                let tree = walker.scan(&app.root)?;
                debug!(app = %app.name, root = %app.root.display(), "scanned app");
                Ok(App {
                    name: app.name,
                    root: app.root,
                    updater: Mutex::new(IncrementalUpdater::new(tree, walker.config())),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(apps = apps.len(), "apps ready");
        Ok(Self { apps, walker })
    }

    /// App names in configuration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.apps.iter().map(|app| app.name.as_str())
    }

    pub fn root(&self, name: &str) -> Result<&Path> {
        self.find(name).map(|app| app.root.as_path())
    }

    pub fn walker(&self) -> &TreeWalker {
        &self.walker
    }

    /// The app owning `path`. Nested roots resolve to the innermost one.
    pub fn app_for_path(&self, path: &Path) -> Option<&str> {
        self.owner(path).map(|app| app.name.as_str())
    }

    /// Apply an event to the app owning `path`.
    ///
    /// Returns the app's name if its tree changed.
    pub fn apply(&self, path: &Path, event: WatchEvent) -> Result<Option<&str>> {
        let Some(app) = self.owner(path) else {
            return Ok(None);
        };

        let changed = app.updater.lock().apply(path, event)?;
        Ok(changed.then_some(app.name.as_str()))
    }

    /// Copy of an app's current file tree.
    pub fn snapshot(&self, name: &str) -> Result<DirectoryNode> {
        Ok(self.find(name)?.updater.lock().snapshot())
    }

    /// Render an app's routes program from a snapshot of its tree.
    pub fn render(&self, name: &str) -> Result<Program> {
        let tree = self.snapshot(name)?;
        render_routes(&tree)
    }

    fn find(&self, name: &str) -> Result<&App> {
        self.apps
            .iter()
            .find(|app| app.name == name)
            .ok_or_else(|| RouteError::UnknownApp(name.to_string()))
    }

    fn owner(&self, path: &Path) -> Option<&App> {
        self.apps
            .iter()
            .filter(|app| path.starts_with(&app.root))
            .max_by_key(|app| app.root.components().count())
    }
}
