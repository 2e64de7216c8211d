//! ServiceState: the composed engine plus the admin operation surface

use crate::auth::Principal;
use crate::config::ServiceConfig;
use chrono::{DateTime, Utc};
use market_coordinator::{MarketCoordinator, MarketError, MarketStatus};
use market_core::{
    Clock, Player, PlayerId, Role, SlotId, SystemClock, Team, TeamId, Week, WeekScore,
};
use market_store::{InMemoryStore, MarketStore, StoreError};
use score_rebuilder::{RebuildError, WeekScoreRebuilder};
use scoring_engine::ScoringEngine;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors surfaced at the service boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("admin privileges required")]
    AdminRequired,

    #[error("principal {principal} does not own team {team_id}")]
    Forbidden { principal: String, team_id: TeamId },

    #[error("week {number} not found")]
    WeekNotFound { number: u32 },

    #[error(transparent)]
    Market(#[from] MarketError),

    #[error(transparent)]
    Rebuild(#[from] RebuildError),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

type Result<T> = std::result::Result<T, ServiceError>;

/// Composed engine state. A transport layer (out of scope here) would hold
/// one of these and map RPC calls onto its methods.
pub struct ServiceState {
    store: Arc<dyn MarketStore>,
    coordinator: MarketCoordinator,
    rebuilder: WeekScoreRebuilder,
    config: ServiceConfig,
}

impl ServiceState {
    /// Wire the engine against an in-memory store and the system clock
    pub fn new_in_memory(config: ServiceConfig) -> Self {
        Self::new(Arc::new(InMemoryStore::new()), Arc::new(SystemClock), config)
    }

    pub fn new(
        store: Arc<dyn MarketStore>,
        clock: Arc<dyn Clock>,
        config: ServiceConfig,
    ) -> Self {
        let coordinator = MarketCoordinator::new(store.clone(), clock, config.market);
        let engine = ScoringEngine::new(config.scoring);
        let rebuilder = WeekScoreRebuilder::new(store.clone(), engine);
        Self { store, coordinator, rebuilder, config }
    }

    pub fn store(&self) -> &Arc<dyn MarketStore> {
        &self.store
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn ensure_admin(principal: &Principal) -> Result<()> {
        if !principal.admin {
            return Err(ServiceError::AdminRequired);
        }
        Ok(())
    }

    /// Market ops act on the caller's own team; admins may act on any
    async fn ensure_team_access(&self, principal: &Principal, team_id: TeamId) -> Result<()> {
        if principal.admin {
            return Ok(());
        }
        let team = self
            .store
            .get_team(team_id)
            .await?
            .ok_or(MarketError::TeamNotFound { team_id })?;
        if team.owner != principal.id {
            return Err(ServiceError::Forbidden { principal: principal.id.clone(), team_id });
        }
        Ok(())
    }

    // -- user-facing market surface --

    /// Register a team for the caller, funded at the salary cap
    pub async fn create_team(&self, principal: &Principal, name: &str) -> Result<Team> {
        let team = Team::new(principal.id.clone(), name, self.config.market.salary_cap);
        self.store.put_team(team.clone()).await?;
        info!(team_id = %team.id, owner = %principal.id, "team created");
        Ok(team)
    }

    pub async fn buy(
        &self,
        principal: &Principal,
        team_id: TeamId,
        player_id: PlayerId,
        role: Option<Role>,
        replace_slot_id: Option<SlotId>,
    ) -> Result<()> {
        self.ensure_team_access(principal, team_id).await?;
        Ok(self.coordinator.buy(team_id, player_id, role, replace_slot_id).await?)
    }

    pub async fn sell(
        &self,
        principal: &Principal,
        team_id: TeamId,
        slot_id: SlotId,
    ) -> Result<()> {
        self.ensure_team_access(principal, team_id).await?;
        Ok(self.coordinator.sell(team_id, slot_id).await?)
    }

    pub async fn set_role(
        &self,
        principal: &Principal,
        team_id: TeamId,
        slot_id: SlotId,
        role: Role,
        swap_with_slot_id: Option<SlotId>,
    ) -> Result<()> {
        self.ensure_team_access(principal, team_id).await?;
        Ok(self.coordinator.set_role(team_id, slot_id, role, swap_with_slot_id).await?)
    }

    pub async fn lock_in(&self, principal: &Principal, team_id: TeamId) -> Result<()> {
        self.ensure_team_access(principal, team_id).await?;
        Ok(self.coordinator.lock_in(team_id).await?)
    }

    pub async fn market_status(&self) -> Result<MarketStatus> {
        Ok(self.coordinator.market_status().await?)
    }

    pub async fn week_score(&self, team_id: TeamId, week_number: u32) -> Result<Option<WeekScore>> {
        let week = self
            .store
            .get_week_by_number(week_number)
            .await?
            .ok_or(ServiceError::WeekNotFound { number: week_number })?;
        Ok(self.store.get_week_score(team_id, week.id).await?)
    }

    // -- admin surface --

    /// Register a tradable player (admin)
    pub async fn create_player(
        &self,
        principal: &Principal,
        name: &str,
        price: i64,
    ) -> Result<Player> {
        Self::ensure_admin(principal)?;
        let player = Player::new(name, price);
        self.store.put_player(player.clone()).await?;
        Ok(player)
    }

    /// Reprice a player (admin). Existing slots keep their `price_paid`.
    pub async fn set_player_price(
        &self,
        principal: &Principal,
        player_id: PlayerId,
        price: i64,
    ) -> Result<()> {
        Self::ensure_admin(principal)?;
        let mut player = self
            .store
            .get_player(player_id)
            .await?
            .ok_or(MarketError::PlayerNotFound { player_id })?;
        player.price = price;
        self.store.put_player(player).await?;
        info!(%player_id, price, "player repriced");
        Ok(())
    }

    /// Schedule a week (admin)
    pub async fn schedule_week(
        &self,
        principal: &Principal,
        number: u32,
        start_date: DateTime<Utc>,
        first_broadcast_at: DateTime<Utc>,
        unlocked_at: DateTime<Utc>,
    ) -> Result<Week> {
        Self::ensure_admin(principal)?;
        let week = Week::new(number, start_date, first_broadcast_at, unlocked_at);
        self.store.put_week(week.clone()).await?;
        info!(number, "week scheduled");
        Ok(week)
    }

    /// Toggle the manual market lock on a week (admin)
    pub async fn set_week_lock(
        &self,
        principal: &Principal,
        week_number: u32,
        locked: bool,
    ) -> Result<()> {
        Self::ensure_admin(principal)?;
        let mut week = self
            .store
            .get_week_by_number(week_number)
            .await?
            .ok_or(ServiceError::WeekNotFound { number: week_number })?;
        week.is_locked = locked;
        self.store.put_week(week).await?;
        info!(week_number, locked, "manual week lock updated");
        Ok(())
    }

    /// Recompute every team's score for a week (admin)
    pub async fn rebuild_week(&self, principal: &Principal, week_number: u32) -> Result<()> {
        Self::ensure_admin(principal)?;
        Ok(self.rebuilder.rebuild(week_number).await?)
    }
}
