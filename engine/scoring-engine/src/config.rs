//! Configuration for the scoring engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error for scoring weights
#[derive(Debug, Error)]
pub enum ScoringConfigError {
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Per-unit point weights for each stat category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatWeights {
    pub goal: f64,
    pub assist: f64,
    pub save: f64,
    pub shot: f64,
    /// Raw scoreboard points from the underlying game
    pub scoreboard: f64,
}

/// Scoring configuration: stat weights plus the positional bonus multiplier.
///
/// The bonus multiplier `B` applies additively as `(B - 1) * weight * count`
/// to exactly one stat category per role. `B = 1.0` disables the bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: StatWeights,
    pub bonus_multiplier: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: StatWeights { goal: 50.0, assist: 25.0, save: 25.0, shot: 15.0, scoreboard: 1.0 },
            bonus_multiplier: 2.0,
        }
    }
}

impl ScoringConfig {
    /// Create config from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ScoringConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("FANTASY_POSITION_BONUS") {
            config.bonus_multiplier =
                raw.parse::<f64>().map_err(|_| ScoringConfigError::InvalidConfig {
                    message: format!("invalid FANTASY_POSITION_BONUS: {raw}"),
                })?;
        }

        config.weights.goal = env_weight("FANTASY_POINTS_GOAL", config.weights.goal)?;
        config.weights.assist = env_weight("FANTASY_POINTS_ASSIST", config.weights.assist)?;
        config.weights.save = env_weight("FANTASY_POINTS_SAVE", config.weights.save)?;
        config.weights.shot = env_weight("FANTASY_POINTS_SHOT", config.weights.shot)?;
        config.weights.scoreboard =
            env_weight("FANTASY_POINTS_SCOREBOARD", config.weights.scoreboard)?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        if !self.bonus_multiplier.is_finite() || self.bonus_multiplier < 1.0 {
            return Err(ScoringConfigError::InvalidConfig {
                message: format!("bonus multiplier must be >= 1.0, got {}", self.bonus_multiplier),
            });
        }
        Ok(())
    }
}

fn env_weight(var: &str, default: f64) -> Result<f64, ScoringConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw.parse::<f64>().map_err(|_| ScoringConfigError::InvalidConfig {
            message: format!("invalid {var}: {raw}"),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let config = ScoringConfig::default();
        assert_eq!(config.weights.goal, 50.0);
        assert_eq!(config.weights.assist, 25.0);
        assert_eq!(config.weights.save, 25.0);
        assert_eq!(config.weights.shot, 15.0);
        assert_eq!(config.weights.scoreboard, 1.0);
        assert_eq!(config.bonus_multiplier, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_sub_unity_multiplier() {
        let config = ScoringConfig { bonus_multiplier: 0.5, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
