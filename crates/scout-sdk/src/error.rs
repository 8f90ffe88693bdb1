use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NotFound(String),
    InvalidInput(String),
    Internal(anyhow::Error),
    Runtime(scout_runtime::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Internal(err) => write!(f, "Internal error: {}", err),
            Error::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Internal(err) => Some(err.as_ref()),
            Error::Runtime(err) => Some(err),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal(err)
    }
}

impl From<scout_runtime::Error> for Error {
    fn from(err: scout_runtime::Error) -> Self {
        match err {
            scout_runtime::Error::ProjectNotFound(id) => {
                Error::NotFound(format!("Project with ID {} not found", id))
            }
            other => Error::Runtime(other),
        }
    }
}
