//! Fantasy market demo service
//!
//! Wires the full engine against the in-memory store and walks one season
//! week end to end: roster building, lock-in, a broadcast lock window, the
//! weekly transfer, stats ingestion, and the score rebuild. A transport
//! layer is deliberately out of scope; `ServiceState` is the seam it would
//! call into.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::Parser;
use market_core::{Role, StatLine};
use market_store::MarketStore;
use tracing::info;

use fantasy_service::{initialize_logging, Principal, ServiceConfig, ServiceState};

#[derive(Parser, Debug)]
#[command(name = "fantasy-market", about = "Fantasy roster/market engine demo")]
struct Args {
    /// Number of demo teams to create
    #[arg(long, default_value_t = 2)]
    teams: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = ServiceConfig::from_env().context("failed to load configuration")?;
    initialize_logging(&config.log_level)?;

    let args = Args::parse();
    info!("starting fantasy market engine v{}", env!("CARGO_PKG_VERSION"));

    let state = ServiceState::new_in_memory(config);
    run_demo(&state, args.teams).await?;

    Ok(())
}

async fn run_demo(state: &ServiceState, team_count: usize) -> Result<()> {
    let admin = Principal::admin("admin");
    let now = Utc::now();

    let week = state
        .schedule_week(&admin, 1, now, now + Duration::days(2), now + Duration::days(2) + Duration::hours(3))
        .await?;

    // A pool of priced players, two per role per team plus spares
    let mut players = Vec::new();
    for i in 0..(team_count * 6 + 4) {
        let price = 900_000 + (i as i64 % 7) * 150_000;
        players.push(state.create_player(&admin, &format!("Player {i}"), price).await?);
    }

    let roles = [Role::Striker, Role::Striker, Role::Midfield, Role::Midfield, Role::Defense, Role::Defense];
    let mut teams = Vec::new();
    for t in 0..team_count {
        let owner = Principal::user(format!("owner-{t}"));
        let team = state.create_team(&owner, &format!("Team {t}")).await?;
        for (p, role) in players[t * 6..(t + 1) * 6].iter().zip(roles) {
            state.buy(&owner, team.id, p.id, Some(role), None).await?;
        }
        state.lock_in(&owner, team.id).await?;
        teams.push((owner, team));
    }

    // Ingestion collaborator hands us stat lines for the week
    for (i, player) in players.iter().enumerate() {
        state
            .store()
            .put_stat_line(StatLine {
                player_id: player.id,
                week_id: week.id,
                goals: (i as u32) % 3,
                assists: (i as u32) % 4,
                saves: (i as u32) % 2,
                shots: (i as u32) % 5,
                scoreboard: 100 + (i as u32) * 7,
            })
            .await?;
    }

    state.rebuild_week(&admin, week.number).await?;

    for (_, team) in &teams {
        let score = state
            .week_score(team.id, week.number)
            .await?
            .context("rebuild writes a score per team")?;
        info!(team = %team.name, points = score.points, "week {} score", week.number);
    }

    let status = state.market_status().await?;
    info!(open = status.open, "market status");
    Ok(())
}
