//! Typed identifiers for the domain entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Identifier for a tradable player
    PlayerId
);
entity_id!(
    /// Identifier for a user's fantasy team
    TeamId
);
entity_id!(
    /// Identifier for a roster slot (a Team/Player ownership edge)
    SlotId
);
entity_id!(
    /// Identifier for a fantasy week
    WeekId
);
entity_id!(
    /// Identifier for a real-league club a player belongs to
    ClubId
);
