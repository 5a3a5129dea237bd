//! Error handling for the municipal data loader and analyzer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod util;

/// Specialized error type for loading and parsing municipal data
#[derive(Debug, Error)]
pub enum MunicipalDataError {
    /// Error opening or reading a file
    #[error("IO error reading {}: {context}", path.display())]
    Io {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },
    /// The requested file does not exist
    #[error("File not found: {} (needed for: {purpose})", path.display())]
    NotFound { path: PathBuf, purpose: String },
    /// The path exists but is not a regular file
    #[error("Path is not a file: {}", path.display())]
    NotAFile { path: PathBuf },
    /// A JSON document could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The text is neither a JSON array nor newline-delimited JSON
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),
    /// The source produced no content at all
    #[error("Empty input: {0}")]
    EmptyInput(String),
    /// A filter parameter could not be interpreted
    #[error("Invalid filter value for {field}: {value:?}")]
    InvalidFilter { field: &'static str, value: String },
    /// Configuration value could not be interpreted
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MunicipalDataError {
    /// Build an IO error with the path and the operation that failed
    pub fn io(path: impl Into<PathBuf>, context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            context: context.into(),
            source,
        }
    }

    /// Whether this error came from acquiring the data rather than decoding it
    #[must_use]
    pub const fn is_acquisition_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::NotFound { .. } | Self::NotAFile { .. }
        )
    }
}

/// Result type for municipal data operations
pub type Result<T> = std::result::Result<T, MunicipalDataError>;
