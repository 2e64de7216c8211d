//! market-core - Shared domain model for the fantasy market engine
//!
//! This crate provides the domain types shared across the engine (players,
//! teams, roster slots, weeks, stat lines, week scores), the pure market
//! window policy, and the pure roster constraint validator. Nothing in here
//! touches storage; the coordinator and rebuilder crates compose these pieces
//! against the `market-store` seam.

pub mod clock;
pub mod constraints;
pub mod ids;
pub mod player;
pub mod role;
pub mod score;
pub mod team;
pub mod week;
pub mod window;

pub use clock::{Clock, ManualClock, SystemClock};
pub use constraints::{ConstraintViolation, RosterMutation, RosterRules};
pub use ids::{ClubId, PlayerId, SlotId, TeamId, WeekId};
pub use player::{Player, StatLine};
pub use role::Role;
pub use score::{PointsBreakdown, SlotScore, WeekScore, BREAKDOWN_SCHEMA_VERSION};
pub use team::{Budget, RoleTally, RosterSlot, Team};
pub use week::Week;
