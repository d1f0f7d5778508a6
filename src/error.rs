//! Error types for bezier curve sampling.

use thiserror::Error;

/// Errors that can occur while parsing input or sampling a curve.
#[derive(Debug, Error)]
pub enum BezierError {
    /// A line of the input point table could not be parsed.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// What was expected and what was found.
        reason: String,
    },

    /// The JSON input could not be deserialized.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// A control polygon needs at least one point.
    #[error("at least one control point is required")]
    NoControlPoints,

    /// The parameter step 1/(M-1) is undefined for fewer than two samples.
    #[error("sample count must be at least 2, got {0}")]
    TooFewSamples(usize),
}

/// Result type for bezier operations.
pub type BezierResult<T> = std::result::Result<T, BezierError>;
