use crate::{Error, Result};
use scout_core::{PathPolicy, resolve_data_dir, resolve_home};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_MARKER: &str = ".bmad-core";
pub const DEFAULT_MAX_DEPTH: usize = 5;
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

const DEFAULT_DIRS: &[&str] = &["Projects", "Code", "Development", "workspace", "dev"];
const DEFAULT_EXCLUDED: &[&str] = &["node_modules", ".git", ".vscode", ".idea", "dist", "build"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSection {
    /// Directories under home scanned when no roots are given.
    pub default_dirs: Vec<String>,
    pub max_depth: usize,
    /// Wall-clock budget for the whole scan, checked before each root is
    /// started (`elapsed >= budget` stops). `0` is spent up front, so every
    /// root is skipped.
    pub timeout_ms: u64,
    pub marker: String,
    pub excluded_dirs: Vec<String>,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            default_dirs: DEFAULT_DIRS.iter().map(|s| s.to_string()).collect(),
            max_depth: DEFAULT_MAX_DEPTH,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            marker: DEFAULT_MARKER.to_string(),
            excluded_dirs: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySection {
    /// Extra bases appended to home, /usr/local/ and /opt/.
    pub allowed_bases: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchBackend {
    #[default]
    Native,
    Poll,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchSection {
    pub backend: WatchBackend,
    pub poll_interval_ms: u64,
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            backend: WatchBackend::Native,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub scan: ScanSection,
    #[serde(default)]
    pub security: SecuritySection,
    #[serde(default)]
    pub watch: WatchSection,
}

impl ScanConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ScanConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_data_dir(None)?.join("config.toml"))
    }

    pub fn home(&self) -> Result<PathBuf> {
        Ok(resolve_home(self.security.home.as_deref())?)
    }

    /// Allow-list built from the home directory plus configured extras.
    pub fn path_policy(&self) -> PathPolicy {
        let home = self.home().ok();
        self.security
            .allowed_bases
            .iter()
            .fold(PathPolicy::with_home(home.as_deref()), |policy, base| {
                policy.allow(base)
            })
    }

    /// Configured default directories that exist and are directories.
    pub fn default_roots(&self) -> Result<Vec<PathBuf>> {
        let home = self.home()?;
        Ok(self
            .scan
            .default_dirs
            .iter()
            .map(|dir| home.join(dir))
            .filter(|path| path.is_dir())
            .collect())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.scan.timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.watch.poll_interval_ms)
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.security.home = Some(home.into());
        self
    }

    pub fn allow_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.security.allowed_bases.push(base.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.marker.is_empty() || self.scan.marker.contains(['/', '\\']) {
            return Err(Error::Config(format!(
                "marker must be a single directory name, got '{}'",
                self.scan.marker
            )));
        }
        if self.watch.poll_interval_ms == 0 {
            return Err(Error::Config(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
