//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enums via
//! `#[from]`, so a bad coordinate surfaces with the stage that read it.

use thiserror::Error;

/// Errors produced by `tn-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate {input:?}: {reason}")]
    InvalidCoordinate { input: String, reason: &'static str },
}

/// Shorthand result type for `tn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
