use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::registry::ProjectRegistry;
use crate::scanner::{ScanOutcome, Scanner};
use crate::watch::WatchEvent;
use scout_types::{ProjectId, ProjectRecord};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

/// Scanner plus the registry it feeds.
///
/// Methods that change the registry take `&mut self`, so overlapping scans
/// have to be serialized by whoever owns this value.
pub struct ProjectScanner {
    config: ScanConfig,
    scanner: Scanner,
    registry: ProjectRegistry,
}

impl ProjectScanner {
    pub fn new(config: ScanConfig) -> Self {
        let scanner = Scanner::new(&config);
        let registry = ProjectRegistry::new(&config);
        Self {
            config,
            scanner,
            registry,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    /// Scan `roots` (or the configured default directories), replace the
    /// registry with the result and re-install watches.
    pub async fn scan_for_projects(&mut self, roots: Option<Vec<PathBuf>>) -> Result<ScanOutcome> {
        let roots = match roots {
            Some(roots) => roots,
            None => self.config.default_roots()?,
        };
        tracing::debug!(roots = roots.len(), "Starting project scan");

        let outcome = self.scanner.scan(&roots).await?;

        self.registry.update_cache(&outcome.projects);
        let watched = self.registry.setup_watchers(&outcome.projects);

        tracing::info!(
            projects = outcome.projects.len(),
            watched,
            skipped_roots = outcome.stats.roots_skipped,
            elapsed_ms = outcome.stats.elapsed.as_millis() as u64,
            "Project scan completed"
        );
        Ok(outcome)
    }

    /// Look up a cached project and mark it as accessed.
    pub fn open_project(&mut self, id: &ProjectId) -> Result<ProjectRecord> {
        let project = self
            .registry
            .touch(id)
            .ok_or_else(|| Error::ProjectNotFound(id.clone()))?;
        tracing::info!(name = %project.name, "Project opened");
        Ok(project)
    }

    pub fn cached_projects(&self) -> Vec<ProjectRecord> {
        self.registry.cached_projects()
    }

    pub fn subscribe(&self) -> Receiver<WatchEvent> {
        self.registry.subscribe()
    }

    pub fn destroy(&mut self) {
        self.registry.destroy();
    }
}
