//! Roster constraint validation
//!
//! Pure, side-effect-free checks of a proposed roster mutation against a
//! snapshot of the team's slots and budget. Every mutating path in the
//! coordinator funnels through `RosterRules::validate` so capacity and
//! budget math exists in exactly one place; the coordinator re-reads fresh
//! state immediately before commit so these checks never act on stale
//! counts.

use crate::ids::{PlayerId, SlotId};
use crate::role::Role;
use crate::team::{RosterSlot, Team};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A proposed change to a team's roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RosterMutation {
    /// Buy a player into a new slot
    Add { player_id: PlayerId, price: i64, role: Option<Role> },
    /// Atomically sell the slot and buy the player into its place
    Replace { slot_id: SlotId, player_id: PlayerId, price: i64, role: Option<Role> },
    /// Assign a role to an existing slot
    SetRole { slot_id: SlotId, role: Role },
    /// Exchange the roles of two slots on the same team
    Swap { slot_id: SlotId, other_slot_id: SlotId },
}

/// Why a mutation was rejected
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ConstraintViolation {
    #[error("player {player_id} already owns a slot on this team")]
    DuplicatePlayer { player_id: PlayerId },

    #[error("role {role} is already at capacity ({capacity})")]
    RoleCapacityExceeded { role: Role, capacity: usize },

    #[error("team already has {size} players")]
    TeamFull { size: usize },

    #[error("insufficient budget: required {required}, available {available}")]
    BudgetExceeded { required: i64, available: i64 },

    #[error("slot {slot_id} not found on this team")]
    SlotNotFound { slot_id: SlotId },
}

/// Capacity rules a roster is validated against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RosterRules {
    /// Maximum slots per team
    pub max_slots: usize,
    /// Maximum slots per role
    pub role_capacity: usize,
}

impl Default for RosterRules {
    fn default() -> Self {
        Self { max_slots: 6, role_capacity: 2 }
    }
}

impl RosterRules {
    /// Validate `mutation` against the team's current slots and budget.
    ///
    /// Returns the first violation found; checks are ordered so the most
    /// specific error surfaces (duplicate before capacity before budget).
    pub fn validate(
        &self,
        team: &Team,
        slots: &[RosterSlot],
        mutation: &RosterMutation,
    ) -> Result<(), ConstraintViolation> {
        match mutation {
            RosterMutation::Add { player_id, price, role } => {
                self.check_duplicate(slots, *player_id, None)?;
                if slots.len() >= self.max_slots {
                    return Err(ConstraintViolation::TeamFull { size: slots.len() });
                }
                if let Some(role) = role {
                    self.check_role_capacity(slots, *role, None)?;
                }
                self.check_budget(team, *price)?;
                Ok(())
            }
            RosterMutation::Replace { slot_id, player_id, price, role } => {
                let replaced = find_slot(slots, *slot_id)?;
                self.check_duplicate(slots, *player_id, Some(*slot_id))?;
                if let Some(role) = role {
                    self.check_role_capacity(slots, *role, Some(*slot_id))?;
                }
                self.check_budget(team, *price - replaced.price_paid)?;
                Ok(())
            }
            RosterMutation::SetRole { slot_id, role } => {
                find_slot(slots, *slot_id)?;
                self.check_role_capacity(slots, *role, Some(*slot_id))?;
                Ok(())
            }
            RosterMutation::Swap { slot_id, other_slot_id } => {
                // Roles trade places, so tallies are unchanged by
                // construction; only existence needs checking.
                find_slot(slots, *slot_id)?;
                find_slot(slots, *other_slot_id)?;
                Ok(())
            }
        }
    }

    fn check_duplicate(
        &self,
        slots: &[RosterSlot],
        player_id: PlayerId,
        exclude: Option<SlotId>,
    ) -> Result<(), ConstraintViolation> {
        let duplicate = slots
            .iter()
            .filter(|s| Some(s.id) != exclude)
            .any(|s| s.player_id == player_id);
        if duplicate {
            return Err(ConstraintViolation::DuplicatePlayer { player_id });
        }
        Ok(())
    }

    fn check_role_capacity(
        &self,
        slots: &[RosterSlot],
        role: Role,
        exclude: Option<SlotId>,
    ) -> Result<(), ConstraintViolation> {
        let count = slots
            .iter()
            .filter(|s| Some(s.id) != exclude)
            .filter(|s| s.role == Some(role))
            .count();
        if count >= self.role_capacity {
            return Err(ConstraintViolation::RoleCapacityExceeded {
                role,
                capacity: self.role_capacity,
            });
        }
        Ok(())
    }

    fn check_budget(&self, team: &Team, delta: i64) -> Result<(), ConstraintViolation> {
        if !team.budget.can_apply(delta) {
            return Err(ConstraintViolation::BudgetExceeded {
                required: delta,
                available: team.budget.remaining(),
            });
        }
        Ok(())
    }
}

fn find_slot(slots: &[RosterSlot], slot_id: SlotId) -> Result<&RosterSlot, ConstraintViolation> {
    slots
        .iter()
        .find(|s| s.id == slot_id)
        .ok_or(ConstraintViolation::SlotNotFound { slot_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_with_slots(spent: i64, roles: &[Option<Role>]) -> (Team, Vec<RosterSlot>) {
        let mut team = Team::new("owner", "Testers", 10_000);
        team.budget.spent = spent;
        let slots = roles
            .iter()
            .map(|r| RosterSlot::new(team.id, PlayerId::new(), 1_000, *r))
            .collect();
        (team, slots)
    }

    #[test]
    fn test_add_duplicate_player_rejected() {
        let (team, slots) = team_with_slots(2_000, &[Some(Role::Striker), None]);
        let owned = slots[0].player_id;
        let mutation = RosterMutation::Add { player_id: owned, price: 500, role: None };
        assert_eq!(
            RosterRules::default().validate(&team, &slots, &mutation),
            Err(ConstraintViolation::DuplicatePlayer { player_id: owned })
        );
    }

    #[test]
    fn test_add_to_full_team_rejected() {
        let (team, slots) = team_with_slots(6_000, &[None; 6]);
        let mutation = RosterMutation::Add { player_id: PlayerId::new(), price: 100, role: None };
        assert_eq!(
            RosterRules::default().validate(&team, &slots, &mutation),
            Err(ConstraintViolation::TeamFull { size: 6 })
        );
    }

    #[test]
    fn test_add_over_budget_rejected() {
        let (team, slots) = team_with_slots(9_500, &[None, None]);
        let mutation = RosterMutation::Add { player_id: PlayerId::new(), price: 600, role: None };
        assert_eq!(
            RosterRules::default().validate(&team, &slots, &mutation),
            Err(ConstraintViolation::BudgetExceeded { required: 600, available: 500 })
        );
    }

    #[test]
    fn test_role_capacity_enforced() {
        let (team, slots) =
            team_with_slots(2_000, &[Some(Role::Striker), Some(Role::Striker), None]);
        let rules = RosterRules::default();

        let add = RosterMutation::Add {
            player_id: PlayerId::new(),
            price: 100,
            role: Some(Role::Striker),
        };
        assert!(matches!(
            rules.validate(&team, &slots, &add),
            Err(ConstraintViolation::RoleCapacityExceeded { role: Role::Striker, .. })
        ));

        let set = RosterMutation::SetRole { slot_id: slots[2].id, role: Role::Striker };
        assert!(matches!(
            rules.validate(&team, &slots, &set),
            Err(ConstraintViolation::RoleCapacityExceeded { .. })
        ));

        // Re-assigning an existing striker to striker is a no-op, not a
        // capacity violation: the slot itself is excluded from the count.
        let keep = RosterMutation::SetRole { slot_id: slots[0].id, role: Role::Striker };
        assert!(rules.validate(&team, &slots, &keep).is_ok());
    }

    #[test]
    fn test_replace_budget_uses_price_delta() {
        let (team, slots) = team_with_slots(9_800, &[None, None]);
        let rules = RosterRules::default();

        // Replacing a 1000-credit slot with a 1100-credit player needs only
        // the 100-credit delta.
        let ok = RosterMutation::Replace {
            slot_id: slots[0].id,
            player_id: PlayerId::new(),
            price: 1_100,
            role: None,
        };
        assert!(rules.validate(&team, &slots, &ok).is_ok());

        let too_much = RosterMutation::Replace {
            slot_id: slots[0].id,
            player_id: PlayerId::new(),
            price: 1_300,
            role: None,
        };
        assert_eq!(
            rules.validate(&team, &slots, &too_much),
            Err(ConstraintViolation::BudgetExceeded { required: 300, available: 200 })
        );
    }

    #[test]
    fn test_swap_needs_both_slots() {
        let (team, slots) = team_with_slots(2_000, &[Some(Role::Striker), Some(Role::Defense)]);
        let rules = RosterRules::default();

        let ok = RosterMutation::Swap { slot_id: slots[0].id, other_slot_id: slots[1].id };
        assert!(rules.validate(&team, &slots, &ok).is_ok());

        let missing = SlotId::new();
        let bad = RosterMutation::Swap { slot_id: slots[0].id, other_slot_id: missing };
        assert_eq!(
            rules.validate(&team, &slots, &bad),
            Err(ConstraintViolation::SlotNotFound { slot_id: missing })
        );
    }

    #[test]
    fn test_replace_missing_slot() {
        let (team, slots) = team_with_slots(1_000, &[None]);
        let missing = SlotId::new();
        let mutation = RosterMutation::Replace {
            slot_id: missing,
            player_id: PlayerId::new(),
            price: 100,
            role: None,
        };
        assert_eq!(
            RosterRules::default().validate(&team, &slots, &mutation),
            Err(ConstraintViolation::SlotNotFound { slot_id: missing })
        );
    }
}
