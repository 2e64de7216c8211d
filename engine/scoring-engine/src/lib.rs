//! scoring-engine - Pure fantasy point computation
//!
//! Maps a stat line plus an assigned role to a point total with an auditable
//! per-stat breakdown. Weights and the positional bonus multiplier are
//! injected through `ScoringConfig`; nothing in here is hardcoded business
//! logic. Deterministic: identical inputs produce bit-identical output, and
//! rounding to integral points happens only at weekly aggregation, never
//! per stat.

pub mod config;
pub mod engine;

pub use config::ScoringConfig;
pub use engine::ScoringEngine;

pub use market_core::PointsBreakdown;
