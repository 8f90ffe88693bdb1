//! TestWorld pattern for declarative integration test setup.
//!
//! Builds an isolated fake home directory in a temp dir, lays out project
//! trees under it, and produces a `ScanConfig` that treats it as home.

use anyhow::Result;
use assert_cmd::Command;
use scout_runtime::{ScanConfig, WatchBackend};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MARKER: &str = ".bmad-core";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use scout_testing::TestWorld;
///
/// let world = TestWorld::new()
///     .with_project("Projects/alpha")
///     .with_file("Projects/notes.txt", "hello");
///
/// let config = world.config();
/// assert_eq!(config.security.home.as_deref(), Some(world.home()));
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    home: PathBuf,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        let data_dir = temp_dir.path().join(".scout");

        std::fs::create_dir_all(&home).expect("Failed to create home dir");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            home,
            data_dir,
        }
    }

    /// Fake home directory; relative paths in this API are resolved against it.
    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Absolute path of `rel` under home.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.home.join(rel)
    }

    /// Create a plain directory.
    pub fn with_dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.path(rel)).expect("Failed to create dir");
        self
    }

    /// Create a directory containing the marker.
    pub fn with_project(self, rel: &str) -> Self {
        self.add_marker(rel);
        self
    }

    pub fn with_file(self, rel: &str, contents: &str) -> Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, contents).expect("Failed to write file");
        self
    }

    pub fn add_marker(&self, rel: &str) {
        std::fs::create_dir_all(self.path(rel).join(MARKER)).expect("Failed to create marker");
    }

    pub fn remove_marker(&self, rel: &str) {
        std::fs::remove_dir_all(self.path(rel).join(MARKER)).expect("Failed to remove marker");
    }

    /// Config rooted at the fake home, using the poll backend with a short
    /// interval so watch tests are deterministic.
    pub fn config(&self) -> ScanConfig {
        let mut config = ScanConfig::default().with_home(&self.home);
        config.watch.backend = WatchBackend::Poll;
        config.watch.poll_interval_ms = 50;
        config
    }

    /// Persist `config` where `configure_command` points the CLI.
    pub fn write_config(&self, config: &ScanConfig) -> Result<PathBuf> {
        let path = self.config_path();
        config.save_to(&path)?;
        Ok(path)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// Writes `config()` if no config file exists yet.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        if !self.config_path().exists() {
            self.write_config(&self.config())
                .expect("Failed to write config");
        }

        cmd.arg("--config")
            .arg(self.config_path())
            .env("HOME", &self.home)
            .env_remove("SCOUT_PATH")
            .env_remove("SCOUT_LOG")
            .current_dir(self.temp_dir.path());
        cmd
    }
}
