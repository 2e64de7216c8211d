//! Configuration for the market coordinator

use market_core::RosterRules;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error for the market coordinator
#[derive(Debug, Error)]
pub enum MarketConfigError {
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// League-level market settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Starting budget for every team, in credits
    pub salary_cap: i64,
    pub rules: RosterRules,
    /// Whether a locked-in team may unlock again. Off by default: lock-in
    /// is a season-long commitment unless the league opts out.
    pub allow_unlock: bool,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self { salary_cap: 10_000_000, rules: RosterRules::default(), allow_unlock: false }
    }
}

impl MarketConfig {
    /// Create config from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, MarketConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("FANTASY_SALARY_CAP") {
            config.salary_cap = raw.parse::<i64>().map_err(|_| {
                MarketConfigError::InvalidConfig { message: format!("invalid FANTASY_SALARY_CAP: {raw}") }
            })?;
        }
        if let Ok(raw) = std::env::var("FANTASY_ROSTER_SIZE") {
            config.rules.max_slots = raw.parse::<usize>().map_err(|_| {
                MarketConfigError::InvalidConfig { message: format!("invalid FANTASY_ROSTER_SIZE: {raw}") }
            })?;
        }
        if let Ok(raw) = std::env::var("FANTASY_ROLE_CAPACITY") {
            config.rules.role_capacity = raw.parse::<usize>().map_err(|_| {
                MarketConfigError::InvalidConfig {
                    message: format!("invalid FANTASY_ROLE_CAPACITY: {raw}"),
                }
            })?;
        }
        if let Ok(raw) = std::env::var("FANTASY_ALLOW_UNLOCK") {
            config.allow_unlock = matches!(raw.as_str(), "1" | "true" | "yes");
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MarketConfigError> {
        if self.salary_cap <= 0 {
            return Err(MarketConfigError::InvalidConfig {
                message: format!("salary cap must be positive, got {}", self.salary_cap),
            });
        }
        if self.rules.max_slots == 0 || self.rules.role_capacity == 0 {
            return Err(MarketConfigError::InvalidConfig {
                message: "roster size and role capacity must be nonzero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MarketConfig::default();
        assert_eq!(config.salary_cap, 10_000_000);
        assert_eq!(config.rules.max_slots, 6);
        assert_eq!(config.rules.role_capacity, 2);
        assert!(!config.allow_unlock);
        assert!(config.validate().is_ok());
    }
}
