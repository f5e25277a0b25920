//! Output adapters

pub mod console;
