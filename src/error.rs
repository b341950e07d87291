use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Search errors
// =============================================================================

/// Broad category of a [`KmpError`].
///
/// Every search failure is a caller mistake; content never makes a search fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KmpError {
    #[error("pattern must not be empty")]
    EmptyPattern,

    #[error("failure function has {failure} entries but the pattern has {pattern} elements")]
    FailureLengthMismatch { pattern: usize, failure: usize },

    #[error("output limit of {max_len} bytes cannot hold a failure function")]
    BufferTooSmall { max_len: usize },
}

impl KmpError {
    pub fn length_mismatch(pattern: usize, failure: usize) -> Self {
        Self::FailureLengthMismatch { pattern, failure }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            KmpError::EmptyPattern
            | KmpError::FailureLengthMismatch { .. }
            | KmpError::BufferTooSmall { .. } => ErrorKind::InvalidArgument,
        }
    }
}

// =============================================================================
// Demo configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("case '{name}' is invalid: {source}")]
    InvalidCase {
        name: String,
        #[source]
        source: KmpError,
    },

    #[error("unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    UnknownLogLevel(String),
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_case(name: impl Into<String>, source: KmpError) -> Self {
        Self::InvalidCase {
            name: name.into(),
            source,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
