//! Run Clinic use case
//!
//! Drains the waiting room, healing every patient in admission order.

use crate::ports::treatment_output::{NoOutput, TreatmentOutput};
use crate::use_cases::heal::{HealError, HealUseCase};
use clinic_domain::{Treatment, Veterinarian, WaitingRoom};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while running the clinic
#[derive(Error, Debug)]
pub enum RunClinicError {
    #[error("Patient #{position} could not be treated: {source}")]
    HealFailed {
        /// 1-based position of the patient in dequeue order
        position: usize,
        #[source]
        source: HealError,
    },
}

/// Outcome of draining the waiting room
#[derive(Debug, Clone, Default)]
pub struct ClinicReport {
    pub treatments: Vec<Treatment>,
}

impl ClinicReport {
    pub fn treated_count(&self) -> usize {
        self.treatments.len()
    }
}

/// Use case for treating every queued patient
pub struct RunClinicUseCase {
    heal: HealUseCase,
}

impl RunClinicUseCase {
    pub fn new(veterinarian: Veterinarian) -> Self {
        Self {
            heal: HealUseCase::new(veterinarian),
        }
    }

    /// Execute the use case without narrative output
    pub fn execute(&self, room: &mut WaitingRoom) -> Result<ClinicReport, RunClinicError> {
        self.execute_with_output(room, &NoOutput)
    }

    /// Dequeue and heal until the room is empty.
    ///
    /// Stops at the first patient that cannot be treated; that patient is
    /// consumed and the ones behind it stay in the room.
    pub fn execute_with_output(
        &self,
        room: &mut WaitingRoom,
        output: &dyn TreatmentOutput,
    ) -> Result<ClinicReport, RunClinicError> {
        info!(
            "Veterinarian {} starting with {} patient(s) waiting",
            self.heal.veterinarian().name(),
            room.len()
        );

        let mut report = ClinicReport::default();

        while let Some(patient) = room.next_patient() {
            let position = report.treated_count() + 1;
            let treatment = self
                .heal
                .execute(&patient, output)
                .map_err(|source| RunClinicError::HealFailed { position, source })?;
            report.treatments.push(treatment);
        }

        info!("Waiting room empty, {} treated", report.treated_count());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::treatment_output::testing::RecordingOutput;
    use crate::use_cases::demo_roster::{demo_veterinarian, demo_waiting_room};
    use clinic_domain::{DomainError, Patient, PetAnimal};
    use serde_json::json;

    #[test]
    fn test_drains_room_in_admission_order() {
        let use_case = RunClinicUseCase::new(demo_veterinarian());
        let output = RecordingOutput::default();
        let mut room = demo_waiting_room().unwrap();

        let report = use_case.execute_with_output(&mut room, &output).unwrap();

        assert_eq!(report.treated_count(), 3);
        assert!(room.is_empty());
        assert_eq!(
            output.lines(),
            vec![
                "Veterinarian Vince began treating \"Fluffy\" - owner Kate P.",
                "\"Fluffy\" makes pet-animal sounds",
                "Treatment of \"Fluffy\" has ended",
                "Veterinarian Vince began treating wolf \"Grey\"",
                "\"Grey\" makes wild-animal sounds",
                "Treatment of \"Grey\" has ended",
                "Veterinarian Vince began treating \"Rex\" - owner Pete",
                "\"Rex\" makes pet-animal sounds",
                "Treatment of \"Rex\" has ended",
            ]
        );
    }

    #[test]
    fn test_empty_room() {
        let use_case = RunClinicUseCase::new(Veterinarian::new("Vince"));
        let report = use_case.execute(&mut WaitingRoom::new()).unwrap();
        assert_eq!(report.treated_count(), 0);
    }

    #[test]
    fn test_stops_at_first_non_animal() {
        let use_case = RunClinicUseCase::new(Veterinarian::new("Vince"));
        let output = RecordingOutput::default();
        let mut room = WaitingRoom::new();
        room.admit(PetAnimal::new("Fluffy", "Kate"));
        room.admit(json!(10));
        room.admit(PetAnimal::new("Rex", "Pete"));

        let err = use_case
            .execute_with_output(&mut room, &output)
            .unwrap_err();

        let RunClinicError::HealFailed { position, source } = err;
        assert_eq!(position, 2);
        let HealError::Rejected(inner) = source;
        assert_eq!(inner, DomainError::NotAnAnimal("10".to_string()));

        // Only the first animal's narrative made it out
        assert_eq!(output.lines().len(), 3);
        assert_eq!(room.len(), 1);
        assert_eq!(
            room.next_patient(),
            Some(Patient::from(PetAnimal::new("Rex", "Pete")))
        );
    }

    #[test]
    fn test_report_keeps_treatments_in_order() {
        let use_case = RunClinicUseCase::new(Veterinarian::new("Vince"));
        let report = use_case.execute(&mut demo_waiting_room().unwrap()).unwrap();
        let names: Vec<&str> = report
            .treatments
            .iter()
            .map(|t| t.animal_name())
            .collect();
        assert_eq!(names, vec!["Fluffy", "Grey", "Rex"]);
    }
}
