//! Graph loading error types

use crate::limits::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for loading operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Errors raised while reading actor and movie files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{}:{line}: missing column '{column}'", .path.display())]
    MissingColumn {
        path: PathBuf,
        line: u64,
        column: &'static str,
    },

    #[error("{}:{line}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        line: u64,
        #[source]
        source: ValidationError,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}
