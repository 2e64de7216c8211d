//! Fantasy week scheduling records

use crate::ids::WeekId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fantasy week.
///
/// The market is implicitly locked for a week while `now` falls inside
/// `[first_broadcast_at, unlocked_at)`, or whenever the manual `is_locked`
/// override is set. After its window passes a week is an immutable
/// scheduling record, except for admin time edits and the lock toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Week {
    pub id: WeekId,
    /// Unique, sequential week number
    pub number: u32,
    pub start_date: DateTime<Utc>,
    /// Start of the broadcast lock window
    pub first_broadcast_at: DateTime<Utc>,
    /// End of the broadcast lock window; market reopens at this instant
    pub unlocked_at: DateTime<Utc>,
    /// Manual admin override; locks the market regardless of the window
    pub is_locked: bool,
}

impl Week {
    pub fn new(
        number: u32,
        start_date: DateTime<Utc>,
        first_broadcast_at: DateTime<Utc>,
        unlocked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: WeekId::new(),
            number,
            start_date,
            first_broadcast_at,
            unlocked_at,
            is_locked: false,
        }
    }
}
