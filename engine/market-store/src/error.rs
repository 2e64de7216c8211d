//! Error types for the storage seam

use market_core::{PlayerId, SlotId, TeamId, WeekId};
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by a `MarketStore` implementation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("team not found: {team_id}")]
    TeamNotFound { team_id: TeamId },

    #[error("player not found: {player_id}")]
    PlayerNotFound { player_id: PlayerId },

    #[error("slot not found: {slot_id}")]
    SlotNotFound { slot_id: SlotId },

    #[error("week not found: {week_id}")]
    WeekNotFound { week_id: WeekId },

    /// Unique-constraint rejection on the (team, week) transfer entry.
    /// A racing duplicate commit fails here instead of double-applying.
    #[error("transfer already recorded for team {team_id} in week {week_id}")]
    TransferConflict { team_id: TeamId, week_id: WeekId },

    /// The commit would break a storage-enforced invariant (budget bounds,
    /// slot ownership). Nothing was applied.
    #[error("commit rejected: {message}")]
    InvariantViolation { message: String },

    /// Infrastructure failure; the whole atomic operation is safe to retry
    #[error("transient storage failure: {message}")]
    Transient { message: String },
}

impl StoreError {
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation { message: message.into() }
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient { message: message.into() }
    }
}
