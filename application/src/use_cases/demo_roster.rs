//! Demonstration roster
//!
//! The patients and veterinarian the `vet-clinic` binary runs with.

use clinic_domain::{DomainError, Patient, PetAnimal, Veterinarian, WaitingRoom, WildAnimal};

/// Name of the veterinarian on duty in the demonstration
pub const DEMO_VETERINARIAN: &str = "Vince";

pub fn demo_veterinarian() -> Veterinarian {
    Veterinarian::new(DEMO_VETERINARIAN)
}

/// Two pets around a wolf, in admission order.
///
/// Fluffy's owner is changed after construction, before admission.
pub fn demo_waiting_room() -> Result<WaitingRoom, DomainError> {
    let mut fluffy = PetAnimal::new("Fluffy", "Kate");
    fluffy.set_owner_name("Kate P.");
    let grey = WildAnimal::new("Grey", "wolf")?;
    let rex = PetAnimal::new("Rex", "Pete");

    Ok([Patient::from(fluffy), grey.into(), rex.into()]
        .into_iter()
        .collect())
}
