//! WeekScoreRebuilder implementation

use crate::error::RebuildError;
use crate::Result;
use market_core::{
    SlotScore, StatLine, Team, Week, WeekScore, BREAKDOWN_SCHEMA_VERSION,
};
use market_store::MarketStore;
use scoring_engine::ScoringEngine;
use std::sync::Arc;
use tracing::info;

/// Batch recomputation of every team's score for one week.
///
/// Scores against the roster as it exists at rebuild time (not the roster
/// as of the week); retroactive roster edits therefore change historical
/// scores on the next rebuild. Does not gate on market-open state.
pub struct WeekScoreRebuilder {
    store: Arc<dyn MarketStore>,
    engine: ScoringEngine,
}

impl WeekScoreRebuilder {
    pub fn new(store: Arc<dyn MarketStore>, engine: ScoringEngine) -> Self {
        Self { store, engine }
    }

    /// Recompute and upsert one `WeekScore` per team for the named week.
    ///
    /// Missing stat lines score as all-zero. Idempotent: unchanged inputs
    /// reproduce the stored value exactly.
    pub async fn rebuild(&self, week_number: u32) -> Result<()> {
        let week = self
            .store
            .get_week_by_number(week_number)
            .await?
            .ok_or(RebuildError::WeekNotFound { number: week_number })?;

        let teams = self.store.list_teams().await?;
        info!(week = week_number, teams = teams.len(), "rebuilding week scores");

        for team in &teams {
            let score = self.score_team(team, &week).await?;
            self.store.upsert_week_score(score).await?;
        }

        Ok(())
    }

    /// One team's weekly score: the slot-ordered breakdown plus the rounded
    /// total. Rounding happens here and nowhere else.
    async fn score_team(&self, team: &Team, week: &Week) -> Result<WeekScore> {
        let slots = self.store.slots_for_team(team.id).await?;

        let mut total = 0.0_f64;
        let mut breakdown = Vec::with_capacity(slots.len());
        for slot in &slots {
            let stats = self
                .store
                .get_stat_line(slot.player_id, week.id)
                .await?
                .unwrap_or_else(|| StatLine::zero(slot.player_id, week.id));
            let points = self.engine.score(&stats, slot.role);
            total += points.total;
            breakdown.push(SlotScore { player_id: slot.player_id, role: slot.role, stats, points });
        }

        Ok(WeekScore {
            team_id: team.id,
            week_id: week.id,
            points: total.round() as i64,
            schema_version: BREAKDOWN_SCHEMA_VERSION,
            breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use market_core::{Player, Role, RosterSlot};
    use market_store::{InMemoryStore, MarketCommit, SlotOp};
    use scoring_engine::ScoringConfig;

    async fn seed_week(store: &InMemoryStore, number: u32) -> Week {
        let now = Utc::now();
        let week = Week::new(number, now, now + Duration::days(1), now + Duration::days(2));
        store.put_week(week.clone()).await.unwrap();
        week
    }

    async fn seed_team_with_player(
        store: &InMemoryStore,
        role: Option<Role>,
        price: i64,
    ) -> (Team, Player) {
        let team = Team::new("owner", "Rebuilt FC", 10_000_000);
        let player = Player::new("Scorer", price);
        store.put_team(team.clone()).await.unwrap();
        store.put_player(player.clone()).await.unwrap();
        let slot = RosterSlot::new(team.id, player.id, price, role);
        store
            .apply_commit(MarketCommit::roster_change(team.id, price, vec![SlotOp::Create(slot)]))
            .await
            .unwrap();
        (team, player)
    }

    fn rebuilder(store: Arc<InMemoryStore>) -> WeekScoreRebuilder {
        WeekScoreRebuilder::new(store, ScoringEngine::new(ScoringConfig::default()))
    }

    #[tokio::test]
    async fn test_missing_week_fails() {
        let store = Arc::new(InMemoryStore::new());
        let err = rebuilder(store).rebuild(99).await.unwrap_err();
        assert_eq!(err, RebuildError::WeekNotFound { number: 99 });
    }

    #[tokio::test]
    async fn test_striker_week_score_with_bonus() {
        let store = Arc::new(InMemoryStore::new());
        let week = seed_week(&store, 1).await;
        let (team, player) = seed_team_with_player(&store, Some(Role::Striker), 1_000).await;

        store
            .put_stat_line(StatLine {
                player_id: player.id,
                week_id: week.id,
                goals: 2,
                assists: 0,
                saves: 0,
                shots: 1,
                scoreboard: 0,
            })
            .await
            .unwrap();

        rebuilder(store.clone()).rebuild(1).await.unwrap();

        let score = store.get_week_score(team.id, week.id).await.unwrap().unwrap();
        // 2 goals * 50 * 2x striker bonus + 1 shot * 15
        assert_eq!(score.points, 215);
        assert_eq!(score.schema_version, BREAKDOWN_SCHEMA_VERSION);
        assert_eq!(score.breakdown.len(), 1);
        assert_eq!(score.breakdown[0].points.bonus_pts, 100.0);
    }

    #[tokio::test]
    async fn test_missing_stat_line_scores_zero() {
        let store = Arc::new(InMemoryStore::new());
        let week = seed_week(&store, 1).await;
        let (team, player) = seed_team_with_player(&store, Some(Role::Defense), 1_000).await;

        rebuilder(store.clone()).rebuild(1).await.unwrap();

        let score = store.get_week_score(team.id, week.id).await.unwrap().unwrap();
        assert_eq!(score.points, 0);
        assert_eq!(score.breakdown.len(), 1);
        assert_eq!(score.breakdown[0].stats, StatLine::zero(player.id, week.id));
    }

    #[tokio::test]
    async fn test_rebuild_is_idempotent() {
        let store = Arc::new(InMemoryStore::new());
        let week = seed_week(&store, 1).await;
        let (team, player) = seed_team_with_player(&store, Some(Role::Midfield), 1_000).await;

        store
            .put_stat_line(StatLine {
                player_id: player.id,
                week_id: week.id,
                goals: 1,
                assists: 3,
                saves: 0,
                shots: 4,
                scoreboard: 120,
            })
            .await
            .unwrap();

        let rebuilder = rebuilder(store.clone());
        rebuilder.rebuild(1).await.unwrap();
        let first = store.get_week_score(team.id, week.id).await.unwrap().unwrap();

        rebuilder.rebuild(1).await.unwrap();
        let second = store.get_week_score(team.id, week.id).await.unwrap().unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_breakdown_sums_to_stored_points() {
        let store = Arc::new(InMemoryStore::new());
        let week = seed_week(&store, 1).await;
        let (team, player) = seed_team_with_player(&store, Some(Role::Midfield), 1_000).await;

        store
            .put_stat_line(StatLine {
                player_id: player.id,
                week_id: week.id,
                goals: 2,
                assists: 5,
                saves: 1,
                shots: 7,
                scoreboard: 333,
            })
            .await
            .unwrap();

        rebuilder(store.clone()).rebuild(1).await.unwrap();

        let score = store.get_week_score(team.id, week.id).await.unwrap().unwrap();
        let replayed: f64 = score.breakdown.iter().map(|s| s.points.total).sum();
        assert_eq!(score.points, replayed.round() as i64);
    }

    #[tokio::test]
    async fn test_rebuild_covers_every_team() {
        let store = Arc::new(InMemoryStore::new());
        let week = seed_week(&store, 1).await;
        let (team_a, _) = seed_team_with_player(&store, Some(Role::Striker), 1_000).await;

        let team_b = Team::new("owner-b", "Empty FC", 10_000_000);
        store.put_team(team_b.clone()).await.unwrap();

        rebuilder(store.clone()).rebuild(1).await.unwrap();

        assert!(store.get_week_score(team_a.id, week.id).await.unwrap().is_some());
        // Teams with empty rosters still get a zero-point artifact
        let empty = store.get_week_score(team_b.id, week.id).await.unwrap().unwrap();
        assert_eq!(empty.points, 0);
        assert!(empty.breakdown.is_empty());
    }
}
