//! Error types for dustmask

use thiserror::Error;

/// Result type alias for dustmask operations
pub type Result<T> = std::result::Result<T, DustError>;

/// Error types that can occur in dustmask
///
/// All errors are configuration errors raised at construction, before any
/// scan is performed. Every read operation after a successful construction
/// is infallible.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DustError {
    /// Window size too small to contain a single triplet
    #[error("invalid window size '{0}': must be at least 3")]
    WindowSizeTooSmall(usize),

    /// Score threshold of zero would mask every triplet pair
    #[error("invalid score threshold '0': must be positive")]
    ScoreThresholdNotPositive,
}
