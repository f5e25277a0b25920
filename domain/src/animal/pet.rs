//! Pet animal entity

use crate::animal::validation::require_string;
use crate::core::error::{DomainError, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A domestic animal with an owner (Entity)
///
/// The name is fixed at construction; the owner may change any number
/// of times but is never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetAnimal {
    name: String,
    owner_name: String,
}

impl PetAnimal {
    pub fn new(name: impl Into<String>, owner_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner_name: owner_name.into(),
        }
    }

    /// Build a pet from untyped input, checking the name before the owner
    pub fn from_values(name: &Value, owner_name: &Value) -> Result<Self, DomainError> {
        let name = require_string(Field::AnimalName, name)?;
        let owner_name = require_string(Field::OwnerName, owner_name)?;
        Ok(Self { name, owner_name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn set_owner_name(&mut self, owner_name: impl Into<String>) {
        self.owner_name = owner_name.into();
    }

    /// Replace the owner from untyped input.
    ///
    /// On failure the current owner is kept.
    pub fn try_set_owner_name(&mut self, value: &Value) -> Result<(), DomainError> {
        self.owner_name = require_string(Field::OwnerName, value)?;
        Ok(())
    }

    pub fn make_noise(&self) -> String {
        format!("\"{}\" makes pet-animal sounds", self.name)
    }

    pub fn full_info(&self) -> String {
        format!("\"{}\" - owner {}", self.name, self.owner_name)
    }
}
