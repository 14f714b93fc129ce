//! Cache error types.

use thiserror::Error;

/// Errors that can occur during cache management operations.
///
/// Reads and writes never fail; only administrative operations do.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Invalidation pattern is not a valid regular expression
    #[error("Invalid invalidation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
