use crate::path::{has_parent_segment, normalize_lexical, project_id_from_path};
use scout_types::ProjectRecord;
use std::fmt;
use std::path::{Path, PathBuf};

/// Longest accepted normalized path, in bytes.
pub const MAX_PATH_BYTES: usize = 4096;

/// Fixed system prefixes that are always allow-listed. Only paths strictly
/// below them qualify; the prefix directory itself does not.
pub const SYSTEM_BASES: &[&str] = &["/usr/local/", "/opt/"];

/// Why a candidate path was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    ParentTraversal,
    NotAbsolute,
    NullByte,
    TooLong,
    OutsideAllowedBases,
    NoDirectoryName,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::ParentTraversal => "parent-directory segment after normalization",
            Rejection::NotAbsolute => "path is not absolute",
            Rejection::NullByte => "path contains a null byte",
            Rejection::TooLong => "path exceeds maximum length",
            Rejection::OutsideAllowedBases => "path outside safe boundaries",
            Rejection::NoDirectoryName => "path has no directory name",
        };
        f.write_str(reason)
    }
}

/// Allow-list of base directories that project paths must live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPolicy {
    allowed_bases: Vec<PathBuf>,
    system_bases: Vec<PathBuf>,
}

impl PathPolicy {
    /// Policy with exactly the given bases (each is normalized).
    pub fn new<I, P>(bases: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self {
            allowed_bases: bases
                .into_iter()
                .map(|b| normalize_lexical(b.as_ref()))
                .collect(),
            system_bases: Vec::new(),
        }
    }

    /// The home directory plus the fixed system prefixes.
    pub fn with_home(home: Option<&Path>) -> Self {
        let mut policy = Self::new(home);
        policy.system_bases = SYSTEM_BASES
            .iter()
            .map(|base| normalize_lexical(Path::new(base)))
            .collect();
        policy
    }

    /// Policy for the current user (`dirs::home_dir()`).
    pub fn system_default() -> Self {
        Self::with_home(dirs::home_dir().as_deref())
    }

    /// Add another allowed base.
    pub fn allow(mut self, base: impl AsRef<Path>) -> Self {
        self.allowed_bases.push(normalize_lexical(base.as_ref()));
        self
    }

    pub fn allowed_bases(&self) -> &[PathBuf] {
        &self.allowed_bases
    }

    pub fn is_allowed(&self, normalized: &Path) -> bool {
        self.allowed_bases
            .iter()
            .any(|base| base.is_absolute() && normalized.starts_with(base))
            || self
                .system_bases
                .iter()
                .any(|base| normalized != base.as_path() && normalized.starts_with(base))
    }

    /// Normalize `raw` and run every safety check, returning the normalized path.
    pub fn check(&self, raw: &Path) -> Result<PathBuf, Rejection> {
        if raw.as_os_str().as_encoded_bytes().contains(&0) {
            return Err(Rejection::NullByte);
        }

        let normalized = normalize_lexical(raw);

        if has_parent_segment(&normalized) {
            return Err(Rejection::ParentTraversal);
        }
        if !normalized.is_absolute() {
            return Err(Rejection::NotAbsolute);
        }
        if normalized.as_os_str().len() > MAX_PATH_BYTES {
            return Err(Rejection::TooLong);
        }
        if !self.is_allowed(&normalized) {
            return Err(Rejection::OutsideAllowedBases);
        }
        if normalized.file_name().is_none() {
            return Err(Rejection::NoDirectoryName);
        }

        Ok(normalized)
    }

    /// Build a project record for `raw`, or `None` when the path is unsafe.
    ///
    /// Rejections are logged without the path itself.
    pub fn validate_and_identify(&self, raw: &Path) -> Option<ProjectRecord> {
        match self.check(raw) {
            Ok(normalized) => {
                let name = normalized.file_name()?.to_string_lossy().into_owned();
                let id = project_id_from_path(&normalized);
                Some(ProjectRecord::discovered(id, name, normalized))
            }
            Err(rejection) => {
                tracing::warn!(
                    reason = %rejection,
                    bytes = raw.as_os_str().len(),
                    "Invalid project path [REDACTED]"
                );
                None
            }
        }
    }
}

impl Default for PathPolicy {
    fn default() -> Self {
        Self::system_default()
    }
}
