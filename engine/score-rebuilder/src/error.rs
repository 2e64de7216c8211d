//! Error types for the rebuilder

use market_store::StoreError;
use thiserror::Error;

/// Result type alias for rebuild operations
pub type Result<T> = std::result::Result<T, RebuildError>;

/// Errors surfaced by a weekly rebuild
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RebuildError {
    #[error("week {number} not found")]
    WeekNotFound { number: u32 },

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
