//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and the calendar converter.

mod divination_service;

pub use divination_service::{parse_line_specs, DivinationRequest, DivinationService, TrigramNames};
