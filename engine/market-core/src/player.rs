//! Player and per-week stat line records

use crate::ids::{ClubId, PlayerId, WeekId};
use serde::{Deserialize, Serialize};

/// A tradable player on the market.
///
/// Price is in credits against the salary cap. Players are shared: they are
/// referenced by roster slots, stat lines, and score breakdowns, and are
/// never deleted while history references them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Current market price in credits; mutated only by admin pricing actions
    pub price: i64,
    /// Real-league club the player belongs to, if known
    pub club_id: Option<ClubId>,
}

impl Player {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self { id: PlayerId::new(), name: name.into(), price, club_id: None }
    }
}

/// One week's aggregate counters for a player.
///
/// Uniquely keyed by (player, week). Produced by an external ingestion
/// collaborator; the engine only reads these. A missing stat line scores as
/// all zeros.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub player_id: PlayerId,
    pub week_id: WeekId,
    pub goals: u32,
    pub assists: u32,
    pub saves: u32,
    pub shots: u32,
    /// Raw scoreboard points from the underlying game
    pub scoreboard: u32,
}

impl StatLine {
    /// An all-zero stat line for a player who did not record stats this week
    pub fn zero(player_id: PlayerId, week_id: WeekId) -> Self {
        Self { player_id, week_id, ..Default::default() }
    }
}
