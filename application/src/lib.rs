//! Application layer for vet-clinic
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::treatment_output::{NoOutput, TreatmentOutput};
pub use use_cases::demo_roster::{demo_veterinarian, demo_waiting_room};
pub use use_cases::heal::{HealError, HealUseCase};
pub use use_cases::run_clinic::{ClinicReport, RunClinicError, RunClinicUseCase};
