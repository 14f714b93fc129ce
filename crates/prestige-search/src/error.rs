//! Search error types.

use thiserror::Error;

/// Errors from loading profile records.
#[derive(Debug, Error)]
pub enum SourceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed profile document
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Offending file
        path: String,
        /// Parser message
        message: String,
    },

    /// Source temporarily unavailable
    #[error("Profile source unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by explicit index operations.
///
/// Queries never return these; they degrade to the last good snapshot.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Loading records for a rebuild failed; the previous index stays live
    #[error("Index build failed: {0}")]
    IndexBuildFailed(#[from] SourceError),
}
