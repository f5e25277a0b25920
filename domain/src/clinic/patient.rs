//! Patient value object

use crate::animal::validation::describe_value;
use crate::animal::{Animal, PetAnimal, WildAnimal};
use crate::core::error::DomainError;
use serde_json::Value;

/// Anything waiting to be seen by the veterinarian
///
/// The waiting room does not check what it admits. Whether a patient is
/// really an animal is only decided when it is treated.
#[derive(Debug, Clone, PartialEq)]
pub enum Patient {
    Animal(Animal),
    Other(Value),
}

impl Patient {
    /// The animal behind this patient, or a type error naming the value
    pub fn as_animal(&self) -> Result<&Animal, DomainError> {
        match self {
            Patient::Animal(animal) => Ok(animal),
            Patient::Other(value) => Err(DomainError::NotAnAnimal(describe_value(value))),
        }
    }

    pub fn is_animal(&self) -> bool {
        matches!(self, Patient::Animal(_))
    }
}

impl From<Animal> for Patient {
    fn from(animal: Animal) -> Self {
        Patient::Animal(animal)
    }
}

impl From<PetAnimal> for Patient {
    fn from(pet: PetAnimal) -> Self {
        Patient::Animal(pet.into())
    }
}

impl From<WildAnimal> for Patient {
    fn from(wild: WildAnimal) -> Self {
        Patient::Animal(wild.into())
    }
}

impl From<Value> for Patient {
    fn from(value: Value) -> Self {
        Patient::Other(value)
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Patient::Animal(animal) => write!(f, "{}", animal),
            Patient::Other(value) => write!(f, "{}", describe_value(value)),
        }
    }
}
