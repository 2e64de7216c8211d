//! Teams, roster slots, and budget accounting

use crate::ids::{PlayerId, SlotId, TeamId};
use crate::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Budget tracks a team's salary-cap position in credits.
///
/// Invariant: `spent <= initial` at all times, and `spent` equals the sum of
/// `price_paid` over the team's current roster slots. The constraint
/// validator checks mutations against this before commit; the store rejects
/// any commit that would break it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub initial: i64,
    pub spent: i64,
}

impl Budget {
    pub fn new(initial: i64) -> Self {
        Self { initial, spent: 0 }
    }

    /// Credits still available under the cap
    pub fn remaining(&self) -> i64 {
        self.initial - self.spent
    }

    /// Would applying `delta` credits of spend keep the budget valid?
    pub fn can_apply(&self, delta: i64) -> bool {
        let next = self.spent + delta;
        next >= 0 && next <= self.initial
    }
}

/// Ownership edge between a team and a player.
///
/// Created by a buy, deleted by a sell, role mutated by role-change/swap.
/// A freshly bought player carries no role until placed on the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub id: SlotId,
    pub team_id: TeamId,
    pub player_id: PlayerId,
    /// Price locked at purchase time; refunded on sell
    pub price_paid: i64,
    pub role: Option<Role>,
}

impl RosterSlot {
    pub fn new(team_id: TeamId, player_id: PlayerId, price_paid: i64, role: Option<Role>) -> Self {
        Self { id: SlotId::new(), team_id, player_id, price_paid, role }
    }
}

/// A user's fantasy team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Authenticated principal that owns this team (supplied by the external
    /// identity collaborator)
    pub owner: String,
    pub name: String,
    pub budget: Budget,
    pub locked_in: bool,
    pub locked_in_at: Option<DateTime<Utc>>,
}

impl Team {
    pub fn new(owner: impl Into<String>, name: impl Into<String>, budget_initial: i64) -> Self {
        Self {
            id: TeamId::new(),
            owner: owner.into(),
            name: name.into(),
            budget: Budget::new(budget_initial),
            locked_in: false,
            locked_in_at: None,
        }
    }
}

/// Per-role slot counts for a roster snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleTally {
    pub striker: usize,
    pub midfield: usize,
    pub defense: usize,
    /// Slots with no assigned role yet
    pub unassigned: usize,
}

impl RoleTally {
    /// Tally roles over a slot snapshot
    pub fn of(slots: &[RosterSlot]) -> Self {
        let mut tally = Self::default();
        for slot in slots {
            match slot.role {
                Some(Role::Striker) => tally.striker += 1,
                Some(Role::Midfield) => tally.midfield += 1,
                Some(Role::Defense) => tally.defense += 1,
                None => tally.unassigned += 1,
            }
        }
        tally
    }

    pub fn count(&self, role: Role) -> usize {
        match role {
            Role::Striker => self.striker,
            Role::Midfield => self.midfield,
            Role::Defense => self.defense,
        }
    }

    /// True when every role is filled to exactly `capacity` and nothing is
    /// left unassigned. This is the lock-in precondition.
    pub fn is_complete(&self, capacity: usize) -> bool {
        self.unassigned == 0 && Role::ALL.iter().all(|r| self.count(*r) == capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_bounds() {
        let mut budget = Budget::new(1_000);
        assert_eq!(budget.remaining(), 1_000);
        assert!(budget.can_apply(1_000));
        assert!(!budget.can_apply(1_001));

        budget.spent = 600;
        assert_eq!(budget.remaining(), 400);
        assert!(budget.can_apply(-600));
        assert!(!budget.can_apply(-601));
    }

    #[test]
    fn test_role_tally_complete() {
        let team = Team::new("owner", "Testers", 10_000);
        let mut slots = Vec::new();
        for role in [Role::Striker, Role::Midfield, Role::Defense] {
            for _ in 0..2 {
                slots.push(RosterSlot::new(team.id, PlayerId::new(), 100, Some(role)));
            }
        }
        let tally = RoleTally::of(&slots);
        assert!(tally.is_complete(2));

        slots[0].role = None;
        let tally = RoleTally::of(&slots);
        assert_eq!(tally.unassigned, 1);
        assert!(!tally.is_complete(2));
    }
}
