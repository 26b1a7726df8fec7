//! Error types for the yamlpick library
//!
//! Every failure a read can hit is represented here: open-time I/O and parse
//! failures, label paths that do not address a value, and value coercion
//! failures. All errors are terminal for the call that produced them; there
//! is no retry or default-substitution anywhere in the crate.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum YamlPickError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors at document open time
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File not found or invalid path
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Target path exists but is not a regular file
    #[error("Not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    /// File exceeds the reader's configured size limit
    #[error("File too large: {} ({size} bytes, limit {limit})", path.display())]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// Permission errors
    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// The label sequence does not resolve to an existing node
    #[error("Invalid label path `{labels}` in {}", path.display())]
    InvalidPath { path: PathBuf, labels: String },

    /// The resolved node cannot be coerced into the requested type
    #[error("Cannot convert value at `{labels}` in {} to {target}: {source}", path.display())]
    Conversion {
        path: PathBuf,
        labels: String,
        target: &'static str,
        source: serde_yaml::Error,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, YamlPickError>;

/// Coarse classification of an error: where in the read pipeline it arose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document could not be opened or parsed
    Io,
    /// The label path addressed nothing
    InvalidPath,
    /// The addressed value refused the requested type
    Conversion,
}

impl YamlPickError {
    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new not-a-file error
    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Create a new invalid path error
    pub fn invalid_path(path: impl Into<PathBuf>, labels: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            labels: labels.into(),
        }
    }

    /// Create a new conversion error
    pub fn conversion(
        path: impl Into<PathBuf>,
        labels: impl Into<String>,
        target: &'static str,
        source: serde_yaml::Error,
    ) -> Self {
        Self::Conversion {
            path: path.into(),
            labels: labels.into(),
            target,
            source,
        }
    }

    /// Get the classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_)
            | Self::Yaml(_)
            | Self::FileNotFound { .. }
            | Self::NotAFile { .. }
            | Self::FileTooLarge { .. }
            | Self::PermissionDenied { .. } => ErrorKind::Io,
            Self::InvalidPath { .. } => ErrorKind::InvalidPath,
            Self::Conversion { .. } => ErrorKind::Conversion,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "io"),
            Self::InvalidPath => write!(f, "invalid-path"),
            Self::Conversion => write!(f, "conversion"),
        }
    }
}
