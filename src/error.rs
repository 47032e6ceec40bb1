//! Error types for the request boundary and the benchmark harness.
//!
//! The rules engine and the searches themselves do not fail: an exhausted
//! budget or a position without legal moves is reported through
//! `Option<Move>`, not through this type.

use thiserror::Error;

/// Errors surfaced to callers.
#[derive(Error, Debug)]
pub enum Error {
    /// Strategy name not present in the registry.
    #[error("Unrecognized strategy: {0}")]
    UnknownStrategy(String),

    /// Board grid is not `size × size`.
    #[error("Board row {row} has {len} cells, expected {size}")]
    BoardShape { size: usize, row: usize, len: usize },

    /// Board side length outside the supported range.
    #[error("Unsupported board size: {0}")]
    InvalidSize(usize),

    /// Declared size disagrees with the grid that was sent.
    #[error("Declared size {declared} does not match board of {actual} rows")]
    SizeMismatch { declared: usize, actual: usize },

    /// Opening move range is empty.
    #[error("Invalid opening range: min {min} > max {max}")]
    InvalidOpening { min: usize, max: usize },

    /// Malformed JSON at the boundary.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failure while reading a request or writing results.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
