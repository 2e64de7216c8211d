//! Persisted weekly score artifacts
//!
//! The breakdown is the audit trail: an ordered list of structured records,
//! one per contributing roster slot, sufficient to reconstruct the full
//! per-stat point derivation without recomputation. Its shape is versioned
//! because downstream aggregation replays it.

use crate::ids::{PlayerId, TeamId, WeekId};
use crate::player::StatLine;
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// Version tag carried by every persisted breakdown
pub const BREAKDOWN_SCHEMA_VERSION: u32 = 1;

/// Per-stat point derivation for one stat line under one role.
///
/// All values are unrounded; rounding happens once, at weekly aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub goals_pts: f64,
    pub assists_pts: f64,
    pub saves_pts: f64,
    pub shots_pts: f64,
    pub scoreboard_pts: f64,
    /// Positional bonus on the role's boosted category
    pub bonus_pts: f64,
    pub total: f64,
}

/// One roster slot's contribution to a team's weekly score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotScore {
    pub player_id: PlayerId,
    pub role: Option<Role>,
    /// The stat line the points were derived from (all-zero if none existed)
    pub stats: StatLine,
    pub points: PointsBreakdown,
}

/// A team's persisted score for one week.
///
/// Unique per (team, week), written only by the rebuilder, and fully
/// re-derivable: deleting and rebuilding with the same inputs reproduces the
/// same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekScore {
    pub team_id: TeamId,
    pub week_id: WeekId,
    /// Rounded weekly total
    pub points: i64,
    pub schema_version: u32,
    pub breakdown: Vec<SlotScore>,
}
