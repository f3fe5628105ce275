//! Error types for the test-support layer
//!
//! Provides unified error handling using thiserror.
//!
//! Translation misses are not errors: table lookups return `None` and the
//! caller treats that as an unsupported configuration. Failures of functions
//! wrapped by the cache stay in the caller's own error type.

use std::path::PathBuf;

use thiserror::Error;

// == Fits Error Enum ==
/// Unified error type for spec loading and configuration.
#[derive(Error, Debug)]
pub enum FitsError {
    /// A spec file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A spec document is not valid JSON
    #[error("Invalid spec document: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value could not be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FitsError {
    /// Wraps an I/O error together with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the test-support layer.
pub type Result<T> = std::result::Result<T, FitsError>;
