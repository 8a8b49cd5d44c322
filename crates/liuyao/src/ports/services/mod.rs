//! Service Ports
//!
//! Abstract interfaces for external services.

mod calendar;

pub use calendar::*;
