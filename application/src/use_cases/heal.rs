//! Heal use case
//!
//! One veterinarian treats one patient and reports the treatment.

use crate::ports::treatment_output::TreatmentOutput;
use clinic_domain::{DomainError, Patient, Treatment, Veterinarian};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while healing a patient
#[derive(Error, Debug)]
pub enum HealError {
    #[error("Patient rejected: {0}")]
    Rejected(#[from] DomainError),
}

/// Use case for treating a single patient
pub struct HealUseCase {
    veterinarian: Veterinarian,
}

impl HealUseCase {
    pub fn new(veterinarian: Veterinarian) -> Self {
        Self { veterinarian }
    }

    pub fn veterinarian(&self) -> &Veterinarian {
        &self.veterinarian
    }

    /// Treat `patient`, writing the three narrative lines to `output`.
    ///
    /// A patient that is not an animal is rejected before any line is
    /// written.
    pub fn execute(
        &self,
        patient: &Patient,
        output: &dyn TreatmentOutput,
    ) -> Result<Treatment, HealError> {
        let treatment = self.veterinarian.treat(patient).inspect_err(|e| {
            warn!(
                "Veterinarian {} refused patient: {}",
                self.veterinarian.name(),
                e
            );
        })?;

        debug!(
            "Veterinarian {} treating {}",
            self.veterinarian.name(),
            treatment.animal_name()
        );

        for line in treatment.lines() {
            output.write_line(line);
        }

        Ok(treatment)
    }
}
