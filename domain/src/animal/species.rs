//! Allowed species for wild animals

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Species a wild animal may belong to (Value Object)
///
/// The set is closed: [`Species::ALL`] is the complete, read-only list
/// shared by every [`WildAnimal`](super::WildAnimal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Wolf,
    Fox,
    Bear,
}

impl Species {
    /// Every allowed species
    pub const ALL: [Species; 3] = [Species::Wolf, Species::Fox, Species::Bear];

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Wolf => "wolf",
            Species::Fox => "fox",
            Species::Bear => "bear",
        }
    }

    /// Russian name, also accepted when parsing
    pub fn localized_name(&self) -> &'static str {
        match self {
            Species::Wolf => "волк",
            Species::Fox => "лиса",
            Species::Bear => "медведь",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Species {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.as_str() == s || species.localized_name() == s)
            .ok_or_else(|| DomainError::UnknownSpecies(s.to_string()))
    }
}
