//! Error types for tn-stats.

use thiserror::Error;

/// Errors that can occur when computing or writing statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("edge {from:?}–{to:?} has no weight attribute")]
    MissingWeight { from: String, to: String },

    #[error("edge {from:?}–{to:?} has unusable weight {value:?}")]
    InvalidWeight { from: String, to: String, value: String },

    #[error("distance statistics are undefined for a graph with no edges")]
    Empty,

    #[error("report format error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, StatsError>`.
pub type StatsResult<T> = Result<T, StatsError>;
