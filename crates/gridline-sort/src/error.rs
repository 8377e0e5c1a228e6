//! Error types for the sort crate.

use thiserror::Error;

/// Errors raised while parsing sort configuration.
///
/// Sorting itself never fails; only textual inputs (a direction token coming
/// from a URL query or a config file) can be rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// The direction token was neither `asc` nor `desc`.
    #[error("invalid sort direction '{0}': expected 'asc' or 'desc'")]
    InvalidDirection(String),
}

/// Result type for sort operations.
pub type Result<T> = std::result::Result<T, SortError>;
