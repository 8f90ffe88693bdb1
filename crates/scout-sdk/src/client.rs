use std::path::PathBuf;
use std::sync::Arc;

use scout_runtime::{Notifier, ProjectScanner, ScanConfig, ScanOutcome};
use scout_types::{OpenResponse, ProjectId, ProjectRecord, ScanRequest, ScanResponse};
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::watch::LiveStream;

/// Handle to a project scanner and its registry.
///
/// Cloning is cheap and every clone shares the same registry. Scans are
/// serialized internally, so concurrent callers never interleave a cache
/// rebuild.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Mutex<ProjectScanner>>,
    notifier: Notifier,
    config: Arc<ScanConfig>,
}

impl Client {
    pub fn new(config: ScanConfig) -> Self {
        let scanner = ProjectScanner::new(config.clone());
        let notifier = scanner.registry().notifier().clone();
        Self {
            inner: Arc::new(Mutex::new(scanner)),
            notifier,
            config: Arc::new(config),
        }
    }

    /// Load the config at `path` (defaults when it does not exist).
    pub fn connect(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = ScanConfig::load_from(&path)?;
        Self::from_config(config)
    }

    /// Load the config from the default location.
    pub fn connect_default() -> Result<Self> {
        let config = ScanConfig::load()?;
        Self::from_config(config)
    }

    fn from_config(config: ScanConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::InvalidInput(e.to_string()))?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan and report the result in transport shape. Never fails; an
    /// unexpected whole-scan error is carried in the response.
    pub async fn scan(&self, request: ScanRequest) -> ScanResponse {
        match self.scan_outcome(&request).await {
            Ok(outcome) => ScanResponse::ok(outcome.projects),
            Err(err) => {
                tracing::error!(error = %err, "Error during project scan");
                ScanResponse::failed(err.to_string())
            }
        }
    }

    /// Scan, keeping the traversal statistics.
    ///
    /// `request.paths = None` scans the configured default directories; an
    /// empty list scans nothing.
    pub async fn scan_outcome(&self, request: &ScanRequest) -> Result<ScanOutcome> {
        tracing::info!(paths = ?request.paths, "Received project scan request");

        let roots = request
            .paths
            .as_ref()
            .map(|paths| paths.iter().map(PathBuf::from).collect());

        let mut scanner = self.inner.lock().await;
        let outcome = scanner.scan_for_projects(roots).await?;

        tracing::info!(
            projects = outcome.projects.len(),
            "Project scan completed successfully"
        );
        Ok(outcome)
    }

    /// Mark a cached project as accessed and return it.
    pub async fn open(&self, project_id: &str) -> OpenResponse {
        tracing::info!(project_id, "Received project open request");

        let mut scanner = self.inner.lock().await;
        match scanner.open_project(&ProjectId::new(project_id)) {
            Ok(project) => {
                tracing::info!(name = %project.name, "Project opened successfully");
                OpenResponse::ok(project)
            }
            Err(err) => {
                tracing::error!(error = %err, "Error opening project");
                OpenResponse::failed(err.to_string())
            }
        }
    }

    pub async fn open_project(&self, project_id: &str) -> Result<ProjectRecord> {
        let mut scanner = self.inner.lock().await;
        Ok(scanner.open_project(&ProjectId::new(project_id))?)
    }

    /// Snapshot of the most recent scan.
    pub async fn cached_projects(&self) -> Vec<ProjectRecord> {
        self.inner.lock().await.cached_projects()
    }

    pub async fn active_watch_count(&self) -> usize {
        self.inner.lock().await.registry().active_watch_count()
    }

    /// Subscribe to change notifications, replacing any earlier subscriber.
    ///
    /// Must be called from within a tokio runtime.
    pub fn watch(&self) -> Result<LiveStream> {
        LiveStream::start(self.notifier.subscribe())
    }

    /// Close every watch, clear the cache and end any live stream.
    /// Safe to call more than once.
    pub async fn shutdown(&self) {
        self.inner.lock().await.destroy();
        tracing::info!("Project scanner shut down");
    }
}
