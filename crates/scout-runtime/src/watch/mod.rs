mod events;
mod notifier;

pub use events::WatchEvent;
pub use notifier::Notifier;

use crate::config::WatchBackend;
use crate::error::Result;
use notify::{Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use scout_types::ProjectRecord;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Watched directory to the project it belongs to.
pub type Routes = HashMap<PathBuf, ProjectRecord>;

/// The project whose marker entry this event touched, if any.
///
/// `Access` events never qualify. The event path's parent must be a watched
/// project directory.
pub fn changed_project(event: &Event, marker: &OsStr, routes: &Routes) -> Option<ProjectRecord> {
    if matches!(event.kind, EventKind::Access(_)) {
        return None;
    }
    event
        .paths
        .iter()
        .filter(|path| path.file_name() == Some(marker))
        .find_map(|path| routes.get(path.parent()?))
        .cloned()
}

/// Project owning `path`: either the watched directory itself or an entry in it.
fn owner_of<'a>(routes: &'a Routes, path: &Path) -> Option<&'a ProjectRecord> {
    routes
        .get(path)
        .or_else(|| path.parent().and_then(|parent| routes.get(parent)))
}

fn lock(routes: &Mutex<Routes>) -> MutexGuard<'_, Routes> {
    routes.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One backend watcher shared by every project directory.
///
/// Each directory is watched non-recursively; events are routed back to
/// their project through the directory table. Each qualifying event is
/// relayed through the notifier on its own; there is no debouncing.
pub struct ProjectWatcher {
    watcher: Box<dyn Watcher + Send>,
    routes: Arc<Mutex<Routes>>,
}

impl ProjectWatcher {
    pub fn new(
        marker: &str,
        backend: WatchBackend,
        poll_interval: Duration,
        notifier: Notifier,
    ) -> Result<Self> {
        let routes: Arc<Mutex<Routes>> = Arc::default();
        let marker = OsString::from(marker);
        let table = Arc::clone(&routes);

        let handler = move |res: notify::Result<Event>| match res {
            Ok(event) => {
                let changed = changed_project(&event, &marker, &lock(&table));
                if let Some(project) = changed {
                    tracing::info!(name = %project.name, id = %project.id, "Project changed");
                    notifier.send(WatchEvent::ProjectChanged(project));
                }
            }
            Err(err) => {
                let owners: Vec<_> = {
                    let table = lock(&table);
                    err.paths
                        .iter()
                        .filter_map(|path| owner_of(&table, path))
                        .map(|project| project.id.clone())
                        .collect()
                };
                tracing::warn!(error = %err, projects = owners.len(), "Watch backend error");
                for project_id in owners {
                    notifier.send(WatchEvent::Error {
                        project_id,
                        message: err.to_string(),
                    });
                }
            }
        };

        let watcher: Box<dyn Watcher + Send> = match backend {
            WatchBackend::Native => Box::new(notify::recommended_watcher(handler)?),
            WatchBackend::Poll => {
                let config = notify::Config::default().with_poll_interval(poll_interval);
                Box::new(PollWatcher::new(handler, config)?)
            }
        };

        Ok(Self { watcher, routes })
    }

    /// Start watching the project's directory.
    pub fn watch(&mut self, project: &ProjectRecord) -> Result<()> {
        lock(&self.routes).insert(project.path.clone(), project.clone());
        if let Err(err) = self
            .watcher
            .watch(project.path(), RecursiveMode::NonRecursive)
        {
            lock(&self.routes).remove(project.path());
            return Err(err.into());
        }
        Ok(())
    }

    /// Stop watching `dir`. Events already in flight for it are dropped.
    pub fn unwatch(&mut self, dir: &Path) {
        lock(&self.routes).remove(dir);
        // The backend drops the watch by itself when the directory is deleted.
        if let Err(err) = self.watcher.unwatch(dir) {
            tracing::debug!(path = %dir.display(), error = %err, "Unwatch failed");
        }
    }

    pub fn watched_dirs(&self) -> usize {
        lock(&self.routes).len()
    }
}
