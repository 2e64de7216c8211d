//! market-store - Transactional storage seam
//!
//! The engine treats storage as an external transactional collaborator: the
//! `MarketStore` trait exposes reads over the domain entities plus two
//! atomic write units (`apply_commit` for market mutations,
//! `upsert_week_score` for the rebuilder). `InMemoryStore` is the reference
//! implementation, backed by a single async mutex over the whole state so
//! every commit is trivially serialized; a relational backend would satisfy
//! the same contract with snapshot-isolated transactions and a unique
//! constraint on (team, week) transfer entries.

pub mod commit;
pub mod error;
pub mod memory;
pub mod store;

pub use commit::{MarketCommit, SlotOp};
pub use error::{Result, StoreError};
pub use memory::InMemoryStore;
pub use store::MarketStore;
