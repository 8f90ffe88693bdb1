use crate::config::{ScanConfig, WatchBackend};
use crate::watch::{Notifier, ProjectWatcher, WatchEvent};
use scout_types::{ProjectId, ProjectRecord};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Cache of the most recent scan plus one watch per cached project.
///
/// The cache is always replaced wholesale; the watch set is torn down before
/// new watches are installed, so there is never more than one per id. All
/// watches share a single backend watcher, created on first use.
pub struct ProjectRegistry {
    cache: HashMap<ProjectId, ProjectRecord>,
    watchers: HashMap<ProjectId, PathBuf>,
    watcher: Option<ProjectWatcher>,
    notifier: Notifier,
    marker: String,
    backend: WatchBackend,
    poll_interval: Duration,
}

impl ProjectRegistry {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            cache: HashMap::new(),
            watchers: HashMap::new(),
            watcher: None,
            notifier: Notifier::new(),
            marker: config.scan.marker.clone(),
            backend: config.watch.backend,
            poll_interval: config.poll_interval(),
        }
    }

    pub fn update_cache(&mut self, records: &[ProjectRecord]) {
        self.cache.clear();
        for record in records {
            self.cache.insert(record.id.clone(), record.clone());
        }
    }

    /// Close every watch, then try to watch each record's directory.
    /// Returns the number of watches installed.
    pub fn setup_watchers(&mut self, records: &[ProjectRecord]) -> usize {
        self.cleanup_watchers();
        if records.is_empty() {
            return 0;
        }

        let watcher = match self.watcher.take() {
            Some(watcher) => watcher,
            None => match ProjectWatcher::new(
                &self.marker,
                self.backend,
                self.poll_interval,
                self.notifier.clone(),
            ) {
                Ok(watcher) => watcher,
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        projects = records.len(),
                        "Could not start watch backend, projects are unwatched"
                    );
                    return 0;
                }
            },
        };
        let watcher = self.watcher.insert(watcher);

        for record in records {
            match watcher.watch(record) {
                Ok(()) => {
                    // Ids derive from paths, so a duplicate id in one batch re-watches the same directory.
                    self.watchers.insert(record.id.clone(), record.path.clone());
                }
                Err(err) => {
                    tracing::warn!(
                        id = %record.id,
                        name = %record.name,
                        error = %err,
                        "Could not set up watcher for project"
                    );
                }
            }
        }

        self.watchers.len()
    }

    pub fn cleanup_watchers(&mut self) {
        if self.watchers.is_empty() {
            return;
        }
        tracing::debug!(count = self.watchers.len(), "Closing project watchers");
        for (_, dir) in self.watchers.drain() {
            if let Some(watcher) = self.watcher.as_mut() {
                watcher.unwatch(&dir);
            }
        }
    }

    /// Point-in-time copy of the cached records.
    pub fn cached_projects(&self) -> Vec<ProjectRecord> {
        self.cache.values().cloned().collect()
    }

    pub fn get(&self, id: &ProjectId) -> Option<&ProjectRecord> {
        self.cache.get(id)
    }

    /// Stamp `last_accessed` on the cached record and return a copy.
    pub fn touch(&mut self, id: &ProjectId) -> Option<ProjectRecord> {
        let record = self.cache.get_mut(id)?;
        record.touch();
        Some(record.clone())
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn active_watch_count(&self) -> usize {
        self.watchers.len()
    }

    pub fn is_watching(&self, id: &ProjectId) -> bool {
        self.watchers.contains_key(id)
    }

    /// Attach the single subscriber, replacing any previous one.
    pub fn subscribe(&self) -> Receiver<WatchEvent> {
        self.notifier.subscribe()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Close watches, clear the cache and detach the subscriber. Idempotent.
    pub fn destroy(&mut self) {
        self.cleanup_watchers();
        self.watcher = None;
        self.cache.clear();
        self.notifier.detach();
    }
}

impl Drop for ProjectRegistry {
    fn drop(&mut self) {
        self.destroy();
    }
}
