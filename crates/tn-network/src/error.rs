//! Network-subsystem error type.

use thiserror::Error;

/// Errors produced by `tn-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("line {line:?} references station {station:?}, which has no registered coordinate")]
    UnknownStation { line: String, station: String },

    #[error("input table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
