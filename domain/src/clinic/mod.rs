//! Clinic: patients, the waiting room and the veterinarian

pub mod patient;
pub mod veterinarian;
pub mod waiting_room;

pub use patient::Patient;
pub use veterinarian::{Treatment, Veterinarian};
pub use waiting_room::WaitingRoom;
