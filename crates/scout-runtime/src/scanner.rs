//! Bounded discovery of project directories.
//!
//! Each root is walked depth-first on the blocking pool. A directory that
//! directly contains the marker becomes a project and its children are not
//! visited. The time budget is only checked before starting each root; a
//! single very large root can overrun it.

use crate::config::ScanConfig;
use crate::error::Result;
use scout_core::{PathPolicy, normalize_lexical};
use scout_types::ProjectRecord;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub roots_scanned: usize,
    /// Roots never started because the time budget ran out.
    pub roots_skipped: usize,
    pub dirs_visited: usize,
    pub read_errors: usize,
    pub elapsed: Duration,
}

impl ScanStats {
    fn absorb(&mut self, other: ScanStats) {
        self.dirs_visited += other.dirs_visited;
        self.read_errors += other.read_errors;
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Discovery order: root order, then depth-first by file name.
    pub projects: Vec<ProjectRecord>,
    pub stats: ScanStats,
}

#[derive(Debug, Clone)]
pub struct Scanner {
    inner: Arc<ScannerInner>,
}

#[derive(Debug)]
struct ScannerInner {
    policy: PathPolicy,
    marker: String,
    excluded: HashSet<String>,
    max_depth: usize,
    timeout: Duration,
}

impl Scanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self::with_policy(config, config.path_policy())
    }

    pub fn with_policy(config: &ScanConfig, policy: PathPolicy) -> Self {
        Self {
            inner: Arc::new(ScannerInner {
                policy,
                marker: config.scan.marker.clone(),
                excluded: config.scan.excluded_dirs.iter().cloned().collect(),
                max_depth: config.scan.max_depth,
                timeout: config.timeout(),
            }),
        }
    }

    pub fn policy(&self) -> &PathPolicy {
        &self.inner.policy
    }

    pub fn marker(&self) -> &str {
        &self.inner.marker
    }

    /// Walk every root in order, stopping before the next root once the
    /// time budget is spent. Directory-level failures never fail the scan.
    pub async fn scan(&self, roots: &[PathBuf]) -> Result<ScanOutcome> {
        let started = Instant::now();
        let mut outcome = ScanOutcome::default();

        for (index, root) in roots.iter().enumerate() {
            if started.elapsed() >= self.inner.timeout {
                tracing::warn!(
                    remaining = roots.len() - index,
                    "Scan timeout reached, skipping remaining roots"
                );
                outcome.stats.roots_skipped = roots.len() - index;
                break;
            }

            let inner = Arc::clone(&self.inner);
            let root = root.clone();
            let (projects, stats) =
                tokio::task::spawn_blocking(move || inner.scan_root(&root)).await?;

            outcome.projects.extend(projects);
            outcome.stats.absorb(stats);
            outcome.stats.roots_scanned += 1;
        }

        outcome.stats.elapsed = started.elapsed();
        tracing::debug!(
            projects = outcome.projects.len(),
            roots = outcome.stats.roots_scanned,
            dirs = outcome.stats.dirs_visited,
            errors = outcome.stats.read_errors,
            elapsed_ms = outcome.stats.elapsed.as_millis() as u64,
            "Scan finished"
        );
        Ok(outcome)
    }

    /// Synchronous walk of a single root.
    pub fn scan_root(&self, root: &Path) -> (Vec<ProjectRecord>, ScanStats) {
        self.inner.scan_root(root)
    }
}

impl ScannerInner {
    fn scan_root(&self, root: &Path) -> (Vec<ProjectRecord>, ScanStats) {
        let mut projects = Vec::new();
        let mut stats = ScanStats::default();
        let root = normalize_lexical(root);

        let mut walker = WalkDir::new(&root)
            .follow_links(false)
            .max_depth(self.max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || (entry.file_type().is_dir() && !self.is_excluded(entry.file_name()))
            });

        while let Some(next) = walker.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(err) => {
                    stats.read_errors += 1;
                    tracing::warn!(
                        path = ?err.path(),
                        depth = err.depth(),
                        error = %err,
                        "Could not read directory, skipping branch"
                    );
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }
            stats.dirs_visited += 1;

            if self.has_marker(entry.path()) {
                if let Some(project) = self.policy.validate_and_identify(entry.path()) {
                    tracing::debug!(id = %project.id, name = %project.name, "Found project");
                    projects.push(project);
                }
                // The walker never descends below max depth on its own.
                if entry.depth() < self.max_depth {
                    walker.skip_current_dir();
                }
            }
        }

        (projects, stats)
    }

    fn has_marker(&self, dir: &Path) -> bool {
        dir.join(&self.marker).is_dir()
    }

    fn is_excluded(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        name.starts_with('.') || self.excluded.contains(name.as_ref())
    }
}
