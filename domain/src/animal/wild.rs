//! Wild animal entity

use crate::animal::species::Species;
use crate::animal::validation::require_string;
use crate::core::error::{DomainError, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A wild animal of a known species (Entity)
///
/// Every field is fixed at construction. The species is always one of
/// [`Species::ALL`]; the spelling it was given in is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WildAnimalRecord", into = "WildAnimalRecord")]
pub struct WildAnimal {
    name: String,
    species: Species,
    animal_type: String,
}

/// Serialized form; deserializing goes back through species validation
#[derive(Serialize, Deserialize)]
struct WildAnimalRecord {
    name: String,
    species: String,
}

impl WildAnimal {
    /// Create a wild animal, parsing the species name
    pub fn new(
        name: impl Into<String>,
        animal_type: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let animal_type = animal_type.into();
        Ok(Self {
            name: name.into(),
            species: animal_type.parse()?,
            animal_type,
        })
    }

    pub fn with_species(name: impl Into<String>, species: Species) -> Self {
        Self {
            name: name.into(),
            species,
            animal_type: species.as_str().to_string(),
        }
    }

    /// Build a wild animal from untyped input.
    ///
    /// The species kind check runs before the membership check, so a
    /// number yields a type error even though it could never be a species.
    pub fn from_values(name: &Value, animal_type: &Value) -> Result<Self, DomainError> {
        let name = require_string(Field::AnimalName, name)?;
        let animal_type = require_string(Field::Species, animal_type)?;
        Self::new(name, animal_type)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    /// Species exactly as it was given
    pub fn animal_type(&self) -> &str {
        &self.animal_type
    }

    pub fn make_noise(&self) -> String {
        format!("\"{}\" makes wild-animal sounds", self.name)
    }

    pub fn full_info(&self) -> String {
        format!("{} \"{}\"", self.animal_type, self.name)
    }
}

impl TryFrom<WildAnimalRecord> for WildAnimal {
    type Error = DomainError;

    fn try_from(record: WildAnimalRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.species)
    }
}

impl From<WildAnimal> for WildAnimalRecord {
    fn from(wild: WildAnimal) -> Self {
        Self {
            name: wild.name,
            species: wild.animal_type,
        }
    }
}
