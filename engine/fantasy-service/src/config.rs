//! Service configuration

use market_coordinator::MarketConfig;
use scoring_engine::ScoringConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error for the service layer
#[derive(Debug, Error)]
pub enum ServiceConfigError {
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Top-level service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub market: MarketConfig,
    pub scoring: ScoringConfig,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            market: MarketConfig::default(),
            scoring: ScoringConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Create config from environment variables.
    ///
    /// `.env` loading happens at startup before this is called; every
    /// unset variable falls back to its default.
    pub fn from_env() -> Result<Self, ServiceConfigError> {
        let market = MarketConfig::from_env().map_err(|e| ServiceConfigError::InvalidConfig {
            message: e.to_string(),
        })?;
        let scoring = ScoringConfig::from_env().map_err(|e| ServiceConfigError::InvalidConfig {
            message: e.to_string(),
        })?;
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self { market, scoring, log_level })
    }
}
