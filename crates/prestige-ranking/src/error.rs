//! Ranking error types.

use prestige_search::SourceError;
use thiserror::Error;

/// Errors from explicit ranking refreshes.
///
/// Table reads never return these; they fall back to the last snapshot.
#[derive(Debug, Error)]
pub enum RankingError {
    /// Reloading profiles failed
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RankingError::from(SourceError::Unavailable("timeout".to_string()));
        assert_eq!(
            err.to_string(),
            "Source error: Profile source unavailable: timeout"
        );
    }
}
