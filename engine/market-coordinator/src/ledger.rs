//! Weekly transfer ledger
//!
//! Tracks whether a team has consumed its one weekly transfer. The ledger
//! entry is keyed by (team, week); its mere existence means "used". The
//! check here is advisory and produces the friendly error before any work
//! happens. The authoritative guard is the unique constraint the store
//! enforces when the consuming commit carries `consume_transfer`, so a
//! racing duplicate fails at commit time instead of double-applying.

use crate::error::MarketError;
use crate::Result;
use market_core::{TeamId, WeekId};
use market_store::MarketStore;
use std::sync::Arc;

/// Read-side of the (team, week) transfer ledger
#[derive(Clone)]
pub struct TransferLedger {
    store: Arc<dyn MarketStore>,
}

impl TransferLedger {
    pub fn new(store: Arc<dyn MarketStore>) -> Self {
        Self { store }
    }

    /// Has this team consumed its transfer for the given week?
    pub async fn has_used(&self, team_id: TeamId, week_id: WeekId) -> Result<bool> {
        Ok(self.store.transfer_used(team_id, week_id).await?)
    }

    /// Fail fast with `TransferAlreadyUsed` when the entry exists
    pub async fn ensure_available(&self, team_id: TeamId, week_id: WeekId) -> Result<()> {
        if self.has_used(team_id, week_id).await? {
            return Err(MarketError::TransferAlreadyUsed { team_id });
        }
        Ok(())
    }
}
