//! Point computation

use crate::config::ScoringConfig;
use market_core::{PointsBreakdown, Role, StatLine};

/// Pure scoring function over injected weights.
///
/// Invoked only by the weekly rebuilder; market operations never score.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Base points with no positional bonus applied
    pub fn raw_points(&self, stats: &StatLine) -> f64 {
        let w = &self.config.weights;
        f64::from(stats.goals) * w.goal
            + f64::from(stats.assists) * w.assist
            + f64::from(stats.saves) * w.save
            + f64::from(stats.shots) * w.shot
            + f64::from(stats.scoreboard) * w.scoreboard
    }

    /// Full per-stat derivation for one stat line under one role.
    ///
    /// The positional bonus is additive: `(B - 1) * weight * count` on the
    /// role's boosted category. No role means base points and zero bonus.
    pub fn score(&self, stats: &StatLine, role: Option<Role>) -> PointsBreakdown {
        let w = &self.config.weights;
        let goals_pts = f64::from(stats.goals) * w.goal;
        let assists_pts = f64::from(stats.assists) * w.assist;
        let saves_pts = f64::from(stats.saves) * w.save;
        let shots_pts = f64::from(stats.shots) * w.shot;
        let scoreboard_pts = f64::from(stats.scoreboard) * w.scoreboard;

        let bonus_pts = match role {
            Some(role) if self.config.bonus_multiplier != 1.0 => {
                let delta = self.config.bonus_multiplier - 1.0;
                match role {
                    Role::Striker => delta * f64::from(stats.goals) * w.goal,
                    Role::Midfield => delta * f64::from(stats.assists) * w.assist,
                    Role::Defense => delta * f64::from(stats.saves) * w.save,
                }
            }
            _ => 0.0,
        };

        let total =
            goals_pts + assists_pts + saves_pts + shots_pts + scoreboard_pts + bonus_pts;

        PointsBreakdown {
            goals_pts,
            assists_pts,
            saves_pts,
            shots_pts,
            scoreboard_pts,
            bonus_pts,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatWeights;
    use market_core::{PlayerId, WeekId};

    fn stats(goals: u32, assists: u32, saves: u32, shots: u32, scoreboard: u32) -> StatLine {
        StatLine {
            player_id: PlayerId::new(),
            week_id: WeekId::new(),
            goals,
            assists,
            saves,
            shots,
            scoreboard,
        }
    }

    #[test]
    fn test_striker_goal_bonus() {
        // goal weight 50, bonus 2x, STRIKER: 2 goals -> 2*50*2 = 200,
        // 1 shot at 15 -> total 215
        let engine = ScoringEngine::new(ScoringConfig::default());
        let breakdown = engine.score(&stats(2, 0, 0, 1, 0), Some(Role::Striker));

        assert_eq!(breakdown.goals_pts, 100.0);
        assert_eq!(breakdown.bonus_pts, 100.0);
        assert_eq!(breakdown.shots_pts, 15.0);
        assert_eq!(breakdown.total, 215.0);
    }

    #[test]
    fn test_bonus_category_tracks_role() {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let line = stats(1, 2, 3, 0, 0);

        assert_eq!(engine.score(&line, Some(Role::Striker)).bonus_pts, 50.0);
        assert_eq!(engine.score(&line, Some(Role::Midfield)).bonus_pts, 50.0);
        assert_eq!(engine.score(&line, Some(Role::Defense)).bonus_pts, 75.0);
    }

    #[test]
    fn test_no_role_means_no_bonus() {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let breakdown = engine.score(&stats(3, 1, 0, 2, 10), None);

        assert_eq!(breakdown.bonus_pts, 0.0);
        assert_eq!(breakdown.total, engine.raw_points(&stats(3, 1, 0, 2, 10)));
    }

    #[test]
    fn test_unity_multiplier_disables_bonus() {
        let config = ScoringConfig { bonus_multiplier: 1.0, ..Default::default() };
        let engine = ScoringEngine::new(config);
        let breakdown = engine.score(&stats(4, 0, 0, 0, 0), Some(Role::Striker));
        assert_eq!(breakdown.bonus_pts, 0.0);
        assert_eq!(breakdown.total, 200.0);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let config = ScoringConfig {
            weights: StatWeights { goal: 50.0, assist: 25.0, save: 25.0, shot: 15.0, scoreboard: 1.0 },
            bonus_multiplier: 1.5,
        };
        let engine = ScoringEngine::new(config);
        let breakdown = engine.score(&stats(2, 3, 1, 4, 120), Some(Role::Midfield));

        let sum = breakdown.goals_pts
            + breakdown.assists_pts
            + breakdown.saves_pts
            + breakdown.shots_pts
            + breakdown.scoreboard_pts
            + breakdown.bonus_pts;
        assert_eq!(sum, breakdown.total);
    }

    #[test]
    fn test_determinism() {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let line = stats(7, 5, 2, 11, 431);
        assert_eq!(engine.score(&line, Some(Role::Defense)), engine.score(&line, Some(Role::Defense)));
    }
}
