//! Services (Adapters)
//!
//! Concrete implementations of the ports.

pub mod calendar;

pub use calendar::{parse_civil_time, ChineseCalendar};
