// File: crates/epichart-core/src/error.rs
// Summary: Error types for input validation across the data-preparation API.

use thiserror::Error;

/// Hard failure on malformed or missing input. Surfaced synchronously to the
/// caller; never recovered internally.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid date `{0}`: expected YYYY-MM-DD")]
    BadDate(String),
    #[error("start date is required when no window length is given")]
    MissingStart,
    #[error("window length must be at least 1")]
    ZeroWindow,
    #[error("series list must be non-empty")]
    EmptySeries,
    #[error("at least one accessor must be provided")]
    NoAccessors,
    #[error("series element {0} is not an object with a `data` array")]
    MalformedSeries(usize),
}

/// Failure raised by a point accessor during value scaling. Reported to the
/// diagnostics sink and skipped; never aborts the scaling pass.
#[derive(Debug, Error)]
#[error("accessor failed: {0}")]
pub struct AccessorError(pub String);

impl AccessorError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
