//! Presentation layer for vet-clinic
//!
//! This crate contains the CLI definition and the console adapter for
//! the treatment output port.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleOutput;
