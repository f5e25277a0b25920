//! Domain layer for vet-clinic
//!
//! This crate contains the animal hierarchy, the veterinarian and the
//! validation rules that keep every entity well formed.
//! It has no dependencies on application or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Animals
//!
//! - **Pet**: has a name and an owner; the owner can change
//! - **Wild**: has a name and a species from a fixed set
//!
//! ## Clinic
//!
//! - **Waiting room**: first-in-first-out queue of patients
//! - **Veterinarian**: turns a patient into a three-line treatment narrative

pub mod animal;
pub mod clinic;
pub mod core;

// Re-export commonly used types
pub use animal::{Animal, PetAnimal, Species, WildAnimal};
pub use clinic::{Patient, Treatment, Veterinarian, WaitingRoom};
pub use core::error::{DomainError, Field};
