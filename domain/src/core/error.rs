//! Domain error types

use thiserror::Error;

/// Attribute that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AnimalName,
    OwnerName,
    Species,
    VeterinarianName,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::AnimalName => "animal name",
            Field::OwnerName => "owner name",
            Field::Species => "species",
            Field::VeterinarianName => "veterinarian name",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain-level errors
///
/// Two kinds of failure exist: a value of the wrong kind was supplied
/// (type error), or a value of the right kind fell outside the allowed
/// domain (value error).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field} must be a string, got {found}")]
    InvalidType { field: Field, found: &'static str },

    #[error("{0} - no such species")]
    UnknownSpecies(String),

    #[error("\"{0}\" is not an animal!")]
    NotAnAnimal(String),
}

impl DomainError {
    /// Check if this error is a type error
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidType { .. } | DomainError::NotAnAnimal(_)
        )
    }

    /// Check if this error is a value error
    pub fn is_value_error(&self) -> bool {
        matches!(self, DomainError::UnknownSpecies(_))
    }
}
