//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external collaborators.
//!
//! Implementations of these traits live in `crate::services`.

pub mod services;

// Re-exports
pub use services::*;
