//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod demo_roster;
pub mod heal;
pub mod run_clinic;
