//! Error types for tn-graphml.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when writing or reading GraphML.
#[derive(Debug, Error)]
pub enum GraphMlError {
    /// Malformed or unsupported GraphML input.
    #[error("GraphML parse error: {0}")]
    Parse(String),

    #[error("I/O error on {}: {source}", .path.display())]
    File {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, GraphMlError>`.
pub type GraphMlResult<T> = Result<T, GraphMlError>;
