use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Length of a project id in hex characters.
pub const PROJECT_ID_LEN: usize = 16;

/// Project identifier derived from the normalized project path via SHA256
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Create a new ProjectId from a string (typically a truncated hex digest)
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Capability descriptor attached to a project.
///
/// Discovery never fills these in; they are carried through for consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One discovered project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    /// Raw directory base name.
    pub name: String,
    /// Normalized absolute path, always inside an allow-listed base.
    pub path: PathBuf,
    pub last_accessed: DateTime<Utc>,
    #[serde(default)]
    pub agents: Vec<Agent>,
    /// Selection flag owned by the consuming layer.
    #[serde(default)]
    pub is_active: bool,
}

impl ProjectRecord {
    /// Fresh record as produced by discovery: no agents, not active,
    /// `last_accessed` set to now.
    pub fn discovered(id: ProjectId, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
            last_accessed: Utc::now(),
            agents: Vec::new(),
            is_active: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mark the project as opened now.
    pub fn touch(&mut self) {
        self.last_accessed = Utc::now();
    }
}
