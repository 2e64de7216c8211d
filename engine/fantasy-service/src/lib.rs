//! fantasy-service - Wiring for the fantasy market engine
//!
//! Composes the store, coordinator, scoring engine, and rebuilder behind a
//! single `ServiceState`, and exposes the admin operation surface (pricing,
//! week scheduling, manual lock toggle, rebuild trigger) gated on the
//! authenticated principal's admin flag. Transport is out of scope:
//! `ServiceState` is the seam a gateway would call into.

pub mod auth;
pub mod config;
pub mod logging;
pub mod service;

pub use auth::Principal;
pub use config::ServiceConfig;
pub use logging::initialize_logging;
pub use service::{ServiceError, ServiceState};
