use crate::{Error, Result};
use scout_types::{PROJECT_ID_LEN, ProjectId};
use sha2::{Digest, Sha256};
use std::path::{Component, Path, PathBuf};

/// Resolve the scout data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SCOUT_PATH environment variable (with tilde expansion)
/// 3. System config directory
/// 4. ~/.scout
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("SCOUT_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("scout"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".scout"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Resolve the home directory, preferring an explicit override.
pub fn resolve_home(explicit_home: Option<&Path>) -> Result<PathBuf> {
    if let Some(home) = explicit_home {
        return Ok(home.to_path_buf());
    }
    dirs::home_dir().ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
}

/// Normalize a path without touching the filesystem.
///
/// `.` segments and repeated separators disappear, `name/..` pairs cancel.
/// A `..` with nothing left to cancel is kept, so callers can detect it.
pub fn normalize_lexical(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// True when any segment of `path` is `..`
pub fn has_parent_segment(path: &Path) -> bool {
    path.components().any(|c| c == Component::ParentDir)
}

/// Derive the project id: the first 16 hex characters of SHA256 over the
/// normalized path string.
pub fn project_id_from_path(normalized: &Path) -> ProjectId {
    let path_str = normalized.to_string_lossy();

    let mut hasher = Sha256::new();
    hasher.update(path_str.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    ProjectId::new(&digest[..PROJECT_ID_LEN])
}
