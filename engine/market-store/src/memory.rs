//! In-memory store implementation
//!
//! Backed by one async mutex over the whole state, which makes every commit
//! serialized and atomic by construction: `apply_commit` validates the full
//! unit against live state while holding the lock and only then mutates.
//! Used by tests and the demo service.

use crate::commit::{MarketCommit, SlotOp};
use crate::error::{Result, StoreError};
use crate::store::MarketStore;
use market_core::{
    Player, PlayerId, Role, RoleTally, RosterSlot, SlotId, StatLine, Team, TeamId, Week, WeekId,
    WeekScore,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct StoreState {
    players: HashMap<PlayerId, Player>,
    teams: HashMap<TeamId, Team>,
    /// Insertion-ordered so roster snapshots are stable across reads
    slots: Vec<RosterSlot>,
    weeks: Vec<Week>,
    stat_lines: HashMap<(PlayerId, WeekId), StatLine>,
    /// Existence of a key means the weekly transfer was consumed
    transfer_entries: HashSet<(TeamId, WeekId)>,
    week_scores: HashMap<(TeamId, WeekId), WeekScore>,
}

/// In-memory `MarketStore`
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreState {
    fn team_slots(&self, team_id: TeamId) -> Vec<RosterSlot> {
        self.slots.iter().filter(|s| s.team_id == team_id).cloned().collect()
    }

    /// Validate a commit against live state. Called with the lock held,
    /// before any mutation, so a failure leaves everything untouched.
    fn check_commit(&self, commit: &MarketCommit) -> Result<()> {
        let team = self
            .teams
            .get(&commit.team_id)
            .ok_or(StoreError::TeamNotFound { team_id: commit.team_id })?;

        // Prospective roster after the slot ops
        let mut roster = self.team_slots(commit.team_id);
        for op in &commit.slot_ops {
            match op {
                SlotOp::Create(slot) => {
                    if slot.team_id != commit.team_id {
                        return Err(StoreError::invariant("created slot belongs to another team"));
                    }
                    if !self.players.contains_key(&slot.player_id) {
                        return Err(StoreError::PlayerNotFound { player_id: slot.player_id });
                    }
                    if roster.iter().any(|s| s.player_id == slot.player_id) {
                        return Err(StoreError::invariant(format!(
                            "player {} already on team {}",
                            slot.player_id, commit.team_id
                        )));
                    }
                    roster.push(slot.clone());
                }
                SlotOp::Delete(slot_id) => {
                    let idx = roster
                        .iter()
                        .position(|s| s.id == *slot_id)
                        .ok_or(StoreError::SlotNotFound { slot_id: *slot_id })?;
                    roster.remove(idx);
                }
                SlotOp::SetRole { slot_id, role } => {
                    let slot = roster
                        .iter_mut()
                        .find(|s| s.id == *slot_id)
                        .ok_or(StoreError::SlotNotFound { slot_id: *slot_id })?;
                    slot.role = *role;
                }
            }
        }

        // Roster limits on the resulting roster. A commit validated by the
        // caller against a snapshot may have raced another writer; this is
        // the re-read-before-commit check that keeps size and capacity
        // invariants intact.
        if let Some(rules) = commit.rules {
            if roster.len() > rules.max_slots {
                return Err(StoreError::invariant(format!(
                    "roster would have {} slots, limit is {}",
                    roster.len(),
                    rules.max_slots
                )));
            }
            let tally = RoleTally::of(&roster);
            for role in Role::ALL {
                if tally.count(role) > rules.role_capacity {
                    return Err(StoreError::invariant(format!(
                        "role {role} would have {} slots, capacity is {}",
                        tally.count(role),
                        rules.role_capacity
                    )));
                }
            }
        }

        // Budget bounds, and budget must equal the sum of price_paid over
        // the resulting roster
        let new_spent = team.budget.spent + commit.budget_delta;
        if new_spent < 0 || new_spent > team.budget.initial {
            return Err(StoreError::invariant(format!(
                "budget out of bounds: spent {new_spent} of {}",
                team.budget.initial
            )));
        }
        let roster_total: i64 = roster.iter().map(|s| s.price_paid).sum();
        if roster_total != new_spent {
            return Err(StoreError::invariant(format!(
                "budget desync: roster total {roster_total}, spent {new_spent}"
            )));
        }

        // Transfer entry uniqueness
        if let Some(week_id) = commit.consume_transfer {
            if !self.weeks.iter().any(|w| w.id == week_id) {
                return Err(StoreError::WeekNotFound { week_id });
            }
            if self.transfer_entries.contains(&(commit.team_id, week_id)) {
                return Err(StoreError::TransferConflict { team_id: commit.team_id, week_id });
            }
        }

        Ok(())
    }

    fn apply_checked(&mut self, commit: MarketCommit) {
        for op in commit.slot_ops {
            match op {
                SlotOp::Create(slot) => self.slots.push(slot),
                SlotOp::Delete(slot_id) => self.slots.retain(|s| s.id != slot_id),
                SlotOp::SetRole { slot_id, role } => {
                    if let Some(slot) = self.slots.iter_mut().find(|s| s.id == slot_id) {
                        slot.role = role;
                    }
                }
            }
        }

        let team = self.teams.get_mut(&commit.team_id).expect("checked above");
        team.budget.spent += commit.budget_delta;
        if let Some(at) = commit.lock_in_at {
            team.locked_in = true;
            team.locked_in_at = Some(at);
        }

        if let Some(week_id) = commit.consume_transfer {
            self.transfer_entries.insert((commit.team_id, week_id));
        }
    }
}

#[async_trait::async_trait]
impl MarketStore for InMemoryStore {
    async fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        Ok(self.state.lock().await.players.get(&player_id).cloned())
    }

    async fn list_players(&self) -> Result<Vec<Player>> {
        let state = self.state.lock().await;
        let mut players: Vec<Player> = state.players.values().cloned().collect();
        players.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(players)
    }

    async fn put_player(&self, player: Player) -> Result<()> {
        self.state.lock().await.players.insert(player.id, player);
        Ok(())
    }

    async fn get_team(&self, team_id: TeamId) -> Result<Option<Team>> {
        Ok(self.state.lock().await.teams.get(&team_id).cloned())
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        let state = self.state.lock().await;
        let mut teams: Vec<Team> = state.teams.values().cloned().collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(teams)
    }

    async fn put_team(&self, team: Team) -> Result<()> {
        self.state.lock().await.teams.insert(team.id, team);
        Ok(())
    }

    async fn get_slot(&self, slot_id: SlotId) -> Result<Option<RosterSlot>> {
        Ok(self.state.lock().await.slots.iter().find(|s| s.id == slot_id).cloned())
    }

    async fn slots_for_team(&self, team_id: TeamId) -> Result<Vec<RosterSlot>> {
        Ok(self.state.lock().await.team_slots(team_id))
    }

    async fn list_weeks(&self) -> Result<Vec<Week>> {
        Ok(self.state.lock().await.weeks.clone())
    }

    async fn get_week_by_number(&self, number: u32) -> Result<Option<Week>> {
        Ok(self.state.lock().await.weeks.iter().find(|w| w.number == number).cloned())
    }

    async fn put_week(&self, week: Week) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.weeks.iter().any(|w| w.number == week.number && w.id != week.id) {
            return Err(StoreError::invariant(format!("week number {} already scheduled", week.number)));
        }
        match state.weeks.iter_mut().find(|w| w.id == week.id) {
            Some(existing) => *existing = week,
            None => state.weeks.push(week),
        }
        Ok(())
    }

    async fn get_stat_line(
        &self,
        player_id: PlayerId,
        week_id: WeekId,
    ) -> Result<Option<StatLine>> {
        Ok(self.state.lock().await.stat_lines.get(&(player_id, week_id)).cloned())
    }

    async fn put_stat_line(&self, stat_line: StatLine) -> Result<()> {
        let mut state = self.state.lock().await;
        state.stat_lines.insert((stat_line.player_id, stat_line.week_id), stat_line);
        Ok(())
    }

    async fn transfer_used(&self, team_id: TeamId, week_id: WeekId) -> Result<bool> {
        Ok(self.state.lock().await.transfer_entries.contains(&(team_id, week_id)))
    }

    async fn apply_commit(&self, commit: MarketCommit) -> Result<()> {
        let mut state = self.state.lock().await;
        state.check_commit(&commit)?;
        tracing::debug!(
            team_id = %commit.team_id,
            budget_delta = commit.budget_delta,
            slot_ops = commit.slot_ops.len(),
            transfer = commit.consume_transfer.is_some(),
            "applying market commit"
        );
        state.apply_checked(commit);
        Ok(())
    }

    async fn upsert_week_score(&self, score: WeekScore) -> Result<()> {
        let mut state = self.state.lock().await;
        state.week_scores.insert((score.team_id, score.week_id), score);
        Ok(())
    }

    async fn get_week_score(
        &self,
        team_id: TeamId,
        week_id: WeekId,
    ) -> Result<Option<WeekScore>> {
        Ok(self.state.lock().await.week_scores.get(&(team_id, week_id)).cloned())
    }
}
