//! Error types for bracket module

use thiserror::Error;

/// Result type for partitioning operations
pub type PartitionResult<T> = Result<T, PartitionError>;

/// Partition session errors.
///
/// None of these leave the session modified; the last valid pools stay in place.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PartitionError {
    /// Bracket size other than 4 or 8
    #[error("Invalid target size: {0} (expected 4 or 8)")]
    InvalidTargetSize(usize),

    /// Sub-pool label not present in the current pools
    #[error("Sub-pool not found: {0}")]
    UnknownSubPool(String),

    /// Operation needs generated pools
    #[error("No pools generated yet")]
    NotPartitioned,
}
