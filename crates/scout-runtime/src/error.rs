use scout_types::ProjectId;
use std::fmt;

/// Result type for scout-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Core layer error (path resolution)
    Core(scout_core::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// No project with this id in the current registry
    ProjectNotFound(ProjectId),

    /// Filesystem watch could not be installed
    Watch(notify::Error),

    /// Background traversal task failed to complete
    Join(tokio::task::JoinError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Core(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::ProjectNotFound(id) => write!(f, "Project with ID {} not found", id),
            Error::Watch(err) => write!(f, "Watch error: {}", err),
            Error::Join(err) => write!(f, "Scan task failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Core(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Watch(err) => Some(err),
            Error::Join(err) => Some(err),
            Error::Config(_) | Error::ProjectNotFound(_) => None,
        }
    }
}

impl From<scout_core::Error> for Error {
    fn from(err: scout_core::Error) -> Self {
        Error::Core(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<notify::Error> for Error {
    fn from(err: notify::Error) -> Self {
        Error::Watch(err)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Join(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
