//! Authenticated principal handed in by the external identity collaborator
//!
//! The engine does not provision identity; it trusts the admin flag the
//! caller's session already carries and gates admin-only operations on it.

use serde::{Deserialize, Serialize};

/// An authenticated caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub admin: bool,
}

impl Principal {
    pub fn user(id: impl Into<String>) -> Self {
        Self { id: id.into(), admin: false }
    }

    pub fn admin(id: impl Into<String>) -> Self {
        Self { id: id.into(), admin: true }
    }
}
