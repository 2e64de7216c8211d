//! Abstract store trait

use crate::commit::MarketCommit;
use crate::error::Result;
use market_core::{
    Player, PlayerId, RosterSlot, SlotId, StatLine, Team, TeamId, Week, WeekId, WeekScore,
};

/// Transactional CRUD over the domain entities.
///
/// Reads return snapshots; the two write units (`apply_commit`,
/// `upsert_week_score`) are atomic and re-validate integrity under the
/// store's own serialization, so callers may validate against a snapshot and
/// still rely on the store to reject a commit that raced a concurrent
/// writer.
#[async_trait::async_trait]
pub trait MarketStore: Send + Sync {
    // -- players --

    async fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>>;
    async fn list_players(&self) -> Result<Vec<Player>>;
    /// Insert or update a player record (admin pricing goes through here)
    async fn put_player(&self, player: Player) -> Result<()>;

    // -- teams and slots --

    async fn get_team(&self, team_id: TeamId) -> Result<Option<Team>>;
    async fn list_teams(&self) -> Result<Vec<Team>>;
    async fn put_team(&self, team: Team) -> Result<()>;
    async fn get_slot(&self, slot_id: SlotId) -> Result<Option<RosterSlot>>;
    /// Current roster snapshot for a team, in slot-creation order
    async fn slots_for_team(&self, team_id: TeamId) -> Result<Vec<RosterSlot>>;

    // -- weeks --

    async fn list_weeks(&self) -> Result<Vec<Week>>;
    async fn get_week_by_number(&self, number: u32) -> Result<Option<Week>>;
    async fn put_week(&self, week: Week) -> Result<()>;

    // -- stat lines (read-only to the engine, seeded by ingestion) --

    async fn get_stat_line(&self, player_id: PlayerId, week_id: WeekId)
        -> Result<Option<StatLine>>;
    async fn put_stat_line(&self, stat_line: StatLine) -> Result<()>;

    // -- transfer ledger --

    /// Does a (team, week) transfer entry exist?
    async fn transfer_used(&self, team_id: TeamId, week_id: WeekId) -> Result<bool>;

    // -- atomic write units --

    /// Apply a market commit all-or-nothing. Integrity (team existence,
    /// slot ownership, duplicates, roster limits when the commit carries
    /// them, budget bounds, transfer uniqueness) is re-checked under the
    /// store's serialization; on any violation nothing is applied.
    async fn apply_commit(&self, commit: MarketCommit) -> Result<()>;

    /// Idempotent upsert of a (team, week) score artifact
    async fn upsert_week_score(&self, score: WeekScore) -> Result<()>;

    async fn get_week_score(&self, team_id: TeamId, week_id: WeekId)
        -> Result<Option<WeekScore>>;
}
