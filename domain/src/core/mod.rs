//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: validation failures (type and value errors)
//! - [`error::Field`]: the validated attributes an error can point at

pub mod error;
