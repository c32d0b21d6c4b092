//! Error types for AdocFix core.

use std::{error::Error, fmt, io};

/// Error type for AdocFix core operations.
#[derive(Debug)]
pub enum AdocFixError {
    /// An underlying I/O error.
    Io(io::Error),
    /// A catch-all error with a message.
    Other(String),
}

impl fmt::Display for AdocFixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for AdocFixError {}

impl From<io::Error> for AdocFixError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl AdocFixError {
    /// Whether this error is an I/O "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == io::ErrorKind::NotFound)
    }
}

/// Convenience result type for AdocFix core.
pub type Result<T> = std::result::Result<T, AdocFixError>;
