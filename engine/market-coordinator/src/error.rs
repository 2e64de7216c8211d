//! Error types for market operations

use market_core::{ConstraintViolation, PlayerId, SlotId, TeamId};
use market_store::StoreError;
use thiserror::Error;

/// Errors surfaced by market operations.
///
/// Every variant is a stable machine-readable kind; the display string is
/// the human-readable explanation. `Locked` and `TransferAlreadyUsed` are
/// recoverable (retry later / next week); constraint violations are
/// client-correctable; `Store` transients are safe to retry whole since
/// every mutation is all-or-nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarketError {
    #[error("market is locked")]
    Locked,

    #[error("weekly transfer already used for team {team_id}")]
    TransferAlreadyUsed { team_id: TeamId },

    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    #[error("team not found: {team_id}")]
    TeamNotFound { team_id: TeamId },

    #[error("player not found: {player_id}")]
    PlayerNotFound { player_id: PlayerId },

    #[error("slot not found: {slot_id}")]
    SlotNotFound { slot_id: SlotId },

    #[error("slot {slot_id} does not belong to team {team_id}")]
    NotOwner { team_id: TeamId, slot_id: SlotId },

    #[error("team {team_id} is already locked in")]
    AlreadyLockedIn { team_id: TeamId },

    #[error("roster not ready for lock-in: {reason}")]
    RosterIncomplete { reason: String },

    #[error("unlock is not enabled for this league")]
    UnlockDisabled,

    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for MarketError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TeamNotFound { team_id } => MarketError::TeamNotFound { team_id },
            StoreError::PlayerNotFound { player_id } => MarketError::PlayerNotFound { player_id },
            StoreError::SlotNotFound { slot_id } => MarketError::SlotNotFound { slot_id },
            StoreError::TransferConflict { team_id, .. } => {
                MarketError::TransferAlreadyUsed { team_id }
            }
            other => MarketError::Store(other),
        }
    }
}
