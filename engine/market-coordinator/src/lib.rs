//! market-coordinator - Market transaction orchestration
//!
//! `MarketCoordinator` drives the per-team market state machine: unlimited
//! roster building before lock-in, then the weekly one-transfer regime. It
//! consults the window policy, the roster constraint validator, and the
//! transfer ledger in that order, and applies every mutation as a single
//! atomic `MarketCommit` through the store seam.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod ledger;

pub use config::MarketConfig;
pub use coordinator::{MarketCoordinator, MarketStatus};
pub use error::MarketError;
pub use ledger::TransferLedger;

/// Result type alias for market operations
pub type Result<T> = std::result::Result<T, MarketError>;
