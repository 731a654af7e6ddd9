//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scanner operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Report parsing errors
    #[error("Failed to parse report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML errors outside of report parsing
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Create a report parse error for the given report file
    pub fn report(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Report {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
