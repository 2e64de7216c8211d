//! MarketCoordinator implementation

use crate::config::MarketConfig;
use crate::error::MarketError;
use crate::ledger::TransferLedger;
use crate::Result;
use chrono::{DateTime, Utc};
use market_core::{
    window, Clock, Role, RoleTally, RosterMutation, RosterSlot, SlotId, PlayerId, Team, TeamId,
    Week,
};
use market_store::{MarketCommit, MarketStore, SlotOp};
use std::sync::Arc;
use tracing::info;

/// Snapshot of the market gate for display purposes
#[derive(Debug, Clone)]
pub struct MarketStatus {
    pub open: bool,
    pub active_week: Option<Week>,
    pub now: DateTime<Utc>,
}

/// Orchestrates buy/sell/role-change/lock-in as atomic operations.
///
/// Per team, the state machine is driven by `locked_in`:
/// - pre-lock-in: unlimited add/replace/role changes while the window is
///   open; sells are always allowed so an over-committed builder can
///   course-correct;
/// - post-lock-in: every operation requires the window open, and any
///   roster-changing move on a full team consumes the weekly transfer.
///
/// All constraint checks run on a fresh snapshot read immediately before
/// the commit, and every roster-changing commit carries the roster rules so
/// the store re-checks size, role capacity, duplicates, and budget under
/// its own serialization. A commit that raced a concurrent writer fails at
/// the store instead of overfilling the roster.
pub struct MarketCoordinator {
    store: Arc<dyn MarketStore>,
    clock: Arc<dyn Clock>,
    config: MarketConfig,
    ledger: TransferLedger,
}

impl MarketCoordinator {
    pub fn new(store: Arc<dyn MarketStore>, clock: Arc<dyn Clock>, config: MarketConfig) -> Self {
        let ledger = TransferLedger::new(store.clone());
        Self { store, clock, config, ledger }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Current gate state: the active week (if any) and whether the market
    /// is open right now
    pub async fn market_status(&self) -> Result<MarketStatus> {
        let now = self.clock.now();
        let weeks = self.store.list_weeks().await?;
        let active = window::active_week(&weeks, now).cloned();
        let open = window::market_open(&weeks, now);
        Ok(MarketStatus { open, active_week: active, now })
    }

    /// Resolve the active week and fail with `Locked` when the window is
    /// closed. `None` means no week is scheduled; the market fails open and
    /// there is nothing to key a transfer against.
    async fn require_open(&self) -> Result<Option<Week>> {
        let status = self.market_status().await?;
        if !status.open {
            return Err(MarketError::Locked);
        }
        Ok(status.active_week)
    }

    async fn require_team(&self, team_id: TeamId) -> Result<Team> {
        self.store
            .get_team(team_id)
            .await?
            .ok_or(MarketError::TeamNotFound { team_id })
    }

    /// Resolve a slot and verify it belongs to the team
    async fn require_owned_slot(&self, team_id: TeamId, slot_id: SlotId) -> Result<RosterSlot> {
        let slot = self
            .store
            .get_slot(slot_id)
            .await?
            .ok_or(MarketError::SlotNotFound { slot_id })?;
        if slot.team_id != team_id {
            return Err(MarketError::NotOwner { team_id, slot_id });
        }
        Ok(slot)
    }

    /// Buy a player, optionally replacing an existing slot.
    ///
    /// Pre-lock-in this is free roster building (window-gated only).
    /// Post-lock-in it consumes the weekly transfer; a full team must name
    /// a `replace_slot_id`, otherwise the add fails on `TeamFull`.
    pub async fn buy(
        &self,
        team_id: TeamId,
        player_id: PlayerId,
        role: Option<Role>,
        replace_slot_id: Option<SlotId>,
    ) -> Result<()> {
        let week = self.require_open().await?;
        let team = self.require_team(team_id).await?;
        let player = self
            .store
            .get_player(player_id)
            .await?
            .ok_or(MarketError::PlayerNotFound { player_id })?;
        let slots = self.store.slots_for_team(team_id).await?;

        let (mutation, budget_delta, slot_ops) = match replace_slot_id {
            Some(slot_id) => {
                let replaced = self.require_owned_slot(team_id, slot_id).await?;
                let mutation = RosterMutation::Replace {
                    slot_id,
                    player_id,
                    price: player.price,
                    role,
                };
                // The incoming player inherits the vacated role unless the
                // caller assigned one explicitly.
                let new_slot =
                    RosterSlot::new(team_id, player_id, player.price, role.or(replaced.role));
                let ops = vec![SlotOp::Delete(slot_id), SlotOp::Create(new_slot)];
                (mutation, player.price - replaced.price_paid, ops)
            }
            None => {
                let mutation =
                    RosterMutation::Add { player_id, price: player.price, role };
                let new_slot = RosterSlot::new(team_id, player_id, player.price, role);
                (mutation, player.price, vec![SlotOp::Create(new_slot)])
            }
        };

        self.config.rules.validate(&team, &slots, &mutation)?;

        let mut commit = MarketCommit::roster_change(team_id, budget_delta, slot_ops)
            .within_rules(self.config.rules);
        if team.locked_in {
            if let Some(week) = &week {
                self.ledger.ensure_available(team_id, week.id).await?;
                commit = commit.consuming_transfer(week.id);
            }
        }

        self.store.apply_commit(commit).await?;
        info!(%team_id, %player_id, replaced = replace_slot_id.is_some(), "buy committed");
        Ok(())
    }

    /// Sell a slot back to the market, refunding `price_paid`.
    ///
    /// Always permitted pre-lock-in, regardless of the window. Post-lock-in
    /// it requires the window open, and selling from a *full* roster is the
    /// team's weekly move.
    pub async fn sell(&self, team_id: TeamId, slot_id: SlotId) -> Result<()> {
        let team = self.require_team(team_id).await?;
        let slot = self.require_owned_slot(team_id, slot_id).await?;

        let mut commit = MarketCommit::roster_change(
            team_id,
            -slot.price_paid,
            vec![SlotOp::Delete(slot_id)],
        )
        .within_rules(self.config.rules);

        if team.locked_in {
            let week = self.require_open().await?;
            let slots = self.store.slots_for_team(team_id).await?;
            let full = slots.len() >= self.config.rules.max_slots;
            if full {
                if let Some(week) = &week {
                    self.ledger.ensure_available(team_id, week.id).await?;
                    commit = commit.consuming_transfer(week.id);
                }
            }
        }

        self.store.apply_commit(commit).await?;
        info!(%team_id, %slot_id, "sell committed");
        Ok(())
    }

    /// Assign a role to a slot, or swap the roles of two slots.
    ///
    /// A swap exchanges roles only (never players) and is capacity-neutral
    /// by construction; a plain role change is capacity-checked. Neither
    /// consumes the weekly transfer.
    pub async fn set_role(
        &self,
        team_id: TeamId,
        slot_id: SlotId,
        role: Role,
        swap_with_slot_id: Option<SlotId>,
    ) -> Result<()> {
        self.require_open().await?;
        let team = self.require_team(team_id).await?;
        let slot = self.require_owned_slot(team_id, slot_id).await?;
        let slots = self.store.slots_for_team(team_id).await?;

        let (mutation, slot_ops) = match swap_with_slot_id {
            Some(other_id) => {
                let other = self.require_owned_slot(team_id, other_id).await?;
                let mutation = RosterMutation::Swap { slot_id, other_slot_id: other_id };
                let ops = vec![
                    SlotOp::SetRole { slot_id, role: other.role },
                    SlotOp::SetRole { slot_id: other_id, role: slot.role },
                ];
                (mutation, ops)
            }
            None => {
                let mutation = RosterMutation::SetRole { slot_id, role };
                (mutation, vec![SlotOp::SetRole { slot_id, role: Some(role) }])
            }
        };

        self.config.rules.validate(&team, &slots, &mutation)?;
        self.store
            .apply_commit(
                MarketCommit::roster_change(team_id, 0, slot_ops)
                    .within_rules(self.config.rules),
            )
            .await?;
        info!(%team_id, %slot_id, %role, swap = swap_with_slot_id.is_some(), "role change committed");
        Ok(())
    }

    /// Transition a team from the building phase to the weekly-one-transfer
    /// regime. Requires a full roster with every role filled to capacity.
    /// Irreversible unless `allow_unlock` is configured.
    pub async fn lock_in(&self, team_id: TeamId) -> Result<()> {
        let team = self.require_team(team_id).await?;
        if team.locked_in {
            return Err(MarketError::AlreadyLockedIn { team_id });
        }

        let slots = self.store.slots_for_team(team_id).await?;
        if slots.len() != self.config.rules.max_slots {
            return Err(MarketError::RosterIncomplete {
                reason: format!(
                    "roster has {} of {} players",
                    slots.len(),
                    self.config.rules.max_slots
                ),
            });
        }
        let tally = RoleTally::of(&slots);
        if !tally.is_complete(self.config.rules.role_capacity) {
            return Err(MarketError::RosterIncomplete {
                reason: format!(
                    "roles not fully assigned: {}/{}/{} with {} unassigned",
                    tally.striker, tally.midfield, tally.defense, tally.unassigned
                ),
            });
        }

        let commit = MarketCommit {
            team_id,
            budget_delta: 0,
            slot_ops: Vec::new(),
            rules: None,
            consume_transfer: None,
            lock_in_at: Some(self.clock.now()),
        };
        self.store.apply_commit(commit).await?;
        info!(%team_id, "team locked in");
        Ok(())
    }

    /// Undo a lock-in. Disabled unless the league opted in via
    /// `allow_unlock`; the default league has no unlock path.
    pub async fn unlock(&self, team_id: TeamId) -> Result<()> {
        if !self.config.allow_unlock {
            return Err(MarketError::UnlockDisabled);
        }
        let mut team = self.require_team(team_id).await?;
        if !team.locked_in {
            return Ok(());
        }
        team.locked_in = false;
        team.locked_in_at = None;
        self.store.put_team(team).await?;
        info!(%team_id, "team unlocked");
        Ok(())
    }
}
