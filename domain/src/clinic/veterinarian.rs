//! Veterinarian entity and the treatment narrative

use crate::animal::validation::require_string;
use crate::clinic::patient::Patient;
use crate::core::error::{DomainError, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A veterinarian who treats animals (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Veterinarian {
    name: String,
}

impl Veterinarian {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn from_value(name: &Value) -> Result<Self, DomainError> {
        Ok(Self {
            name: require_string(Field::VeterinarianName, name)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Work out the treatment narrative for a patient.
    ///
    /// Fails with [`DomainError::NotAnAnimal`] before anything is produced
    /// when the patient is not an animal. The patient is only read.
    pub fn treat(&self, patient: &Patient) -> Result<Treatment, DomainError> {
        let animal = patient.as_animal()?;
        Ok(Treatment {
            animal_name: animal.name().to_string(),
            lines: [
                format!(
                    "Veterinarian {} began treating {}",
                    self.name,
                    animal.full_info()
                ),
                animal.make_noise(),
                format!("Treatment of \"{}\" has ended", animal.name()),
            ],
        })
    }
}

/// The three lines describing one treatment (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Treatment {
    animal_name: String,
    lines: [String; 3],
}

impl Treatment {
    pub fn animal_name(&self) -> &str {
        &self.animal_name
    }

    /// Opening line, the animal's noise, closing line
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::{PetAnimal, WildAnimal};
    use serde_json::json;

    #[test]
    fn test_vet_creation() {
        assert_eq!(Veterinarian::new("Vince").name(), "Vince");
        assert_eq!(Veterinarian::from_value(&json!("Vince")).unwrap().name(), "Vince");
    }

    #[test]
    fn test_vet_name_must_be_string() {
        let err = Veterinarian::from_value(&json!(5)).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidType {
                field: Field::VeterinarianName,
                found: "number"
            }
        );
    }

    #[test]
    fn test_treat_pet() {
        let vet = Veterinarian::new("Vince");
        let treatment = vet.treat(&PetAnimal::new("Rex", "Pete").into()).unwrap();
        assert_eq!(treatment.animal_name(), "Rex");
        assert_eq!(
            treatment.lines(),
            [
                "Veterinarian Vince began treating \"Rex\" - owner Pete",
                "\"Rex\" makes pet-animal sounds",
                "Treatment of \"Rex\" has ended",
            ]
        );
    }

    #[test]
    fn test_treat_wild() {
        let vet = Veterinarian::new("Vince");
        let patient: Patient = WildAnimal::new("Grey", "wolf").unwrap().into();
        let treatment = vet.treat(&patient).unwrap();
        assert_eq!(
            treatment.lines(),
            [
                "Veterinarian Vince began treating wolf \"Grey\"",
                "\"Grey\" makes wild-animal sounds",
                "Treatment of \"Grey\" has ended",
            ]
        );
    }

    #[test]
    fn test_treat_does_not_change_patient() {
        let vet = Veterinarian::new("Vince");
        let patient: Patient = PetAnimal::new("Fluffy", "Kate").into();
        let before = patient.clone();
        vet.treat(&patient).unwrap();
        assert_eq!(patient, before);
    }

    #[test]
    fn test_treat_rejects_non_animal() {
        let vet = Veterinarian::new("Vince");
        let err = vet.treat(&json!(10).into()).unwrap_err();
        assert_eq!(err.to_string(), "\"10\" is not an animal!");
    }
}
