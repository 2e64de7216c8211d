//! The atomic market mutation unit
//!
//! Every mutating market operation (buy, sell, replace, role change,
//! lock-in) is described as one `MarketCommit` and applied all-or-nothing.
//! Partial application (budget debited but slot not created, slot deleted
//! but ledger not marked) is a correctness violation, so the coordinator
//! never issues more than one commit per operation.

use chrono::{DateTime, Utc};
use market_core::{Role, RosterRules, RosterSlot, SlotId, TeamId, WeekId};
use serde::{Deserialize, Serialize};

/// One slot-level change inside a commit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotOp {
    Create(RosterSlot),
    Delete(SlotId),
    SetRole { slot_id: SlotId, role: Option<Role> },
}

/// An atomic unit of market state change for a single team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCommit {
    pub team_id: TeamId,
    /// Signed change to `budget.spent` (positive for buys, negative for
    /// sells)
    pub budget_delta: i64,
    pub slot_ops: Vec<SlotOp>,
    /// When set, the store re-checks the resulting roster against these
    /// limits (size and per-role capacity) under its own serialization, so
    /// a commit validated against a stale snapshot cannot overfill a roster
    pub rules: Option<RosterRules>,
    /// When set, records the weekly transfer entry for this week in the
    /// same unit; fails the whole commit if the entry already exists
    pub consume_transfer: Option<WeekId>,
    /// When set, flips the team to locked-in at the given instant
    pub lock_in_at: Option<DateTime<Utc>>,
}

impl MarketCommit {
    /// A commit that only touches slots and budget
    pub fn roster_change(team_id: TeamId, budget_delta: i64, slot_ops: Vec<SlotOp>) -> Self {
        Self {
            team_id,
            budget_delta,
            slot_ops,
            rules: None,
            consume_transfer: None,
            lock_in_at: None,
        }
    }

    /// Have the store enforce roster size and role capacity on the
    /// resulting roster
    pub fn within_rules(mut self, rules: RosterRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Mark the weekly transfer as consumed inside this unit
    pub fn consuming_transfer(mut self, week_id: WeekId) -> Self {
        self.consume_transfer = Some(week_id);
        self
    }
}
