//! On-field roles for roster slots

use serde::{Deserialize, Serialize};

/// The role a roster slot plays on the fantasy field.
///
/// Each role boosts exactly one stat category when the weekly score is
/// computed: strikers boost goals, midfielders boost assists, defenders
/// boost saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Striker,
    Midfield,
    Defense,
}

impl Role {
    /// All roles, in tally order
    pub const ALL: [Role; 3] = [Role::Striker, Role::Midfield, Role::Defense];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Striker => "STRIKER",
            Role::Midfield => "MIDFIELD",
            Role::Defense => "DEFENSE",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STRIKER" => Ok(Role::Striker),
            "MIDFIELD" => Ok(Role::Midfield),
            "DEFENSE" => Ok(Role::Defense),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
        }
        assert!(Role::from_str("GOALIE").is_err());
    }
}
