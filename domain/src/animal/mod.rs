//! Animal hierarchy
//!
//! [`Animal`] is the closed set of animal kinds. It is never built on its
//! own: every value is either a [`PetAnimal`] or a [`WildAnimal`], and the
//! shared behaviour dispatches on the variant.

pub mod pet;
pub mod species;
pub mod validation;
pub mod wild;

pub use pet::PetAnimal;
pub use species::Species;
pub use wild::WildAnimal;

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validation::describe_value;

/// Any animal the clinic can treat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Animal {
    Pet(PetAnimal),
    Wild(WildAnimal),
}

impl Animal {
    /// Build an animal from a tagged JSON object.
    ///
    /// `{"kind": "pet", "name": .., "owner_name": ..}` or
    /// `{"kind": "wild", "name": .., "species": ..}`. Missing fields are
    /// reported as `null`; anything without a known `kind` is not an animal.
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        match value.get("kind").and_then(Value::as_str) {
            Some("pet") => {
                PetAnimal::from_values(&value["name"], &value["owner_name"]).map(Self::Pet)
            }
            Some("wild") => {
                WildAnimal::from_values(&value["name"], &value["species"]).map(Self::Wild)
            }
            _ => Err(DomainError::NotAnAnimal(describe_value(value))),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Animal::Pet(pet) => pet.name(),
            Animal::Wild(wild) => wild.name(),
        }
    }

    /// Description of the sound this animal makes
    pub fn make_noise(&self) -> String {
        match self {
            Animal::Pet(pet) => pet.make_noise(),
            Animal::Wild(wild) => wild.make_noise(),
        }
    }

    /// Summary line including the name
    pub fn full_info(&self) -> String {
        match self {
            Animal::Pet(pet) => pet.full_info(),
            Animal::Wild(wild) => wild.full_info(),
        }
    }
}

impl From<PetAnimal> for Animal {
    fn from(pet: PetAnimal) -> Self {
        Animal::Pet(pet)
    }
}

impl From<WildAnimal> for Animal {
    fn from(wild: WildAnimal) -> Self {
        Animal::Wild(wild)
    }
}

impl std::fmt::Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_info())
    }
}
