//! Liu Yao Domain Library
//!
//! Core domain types and use cases for six-line (六爻) divination.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure entities and logic
//!   - `entities/`: Pillars, lunar dates, resolved hexagrams, results
//!   - `value_objects/`: Immutable symbols (Stem, Branch, Trigram, lines)
//!   - `services/`: Encoder, transformer, resolver and static tables
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Calendar converter interface
//!
//! - **Services** (`services/`): Port implementations
//!   - `calendar/`: Astronomical Chinese calendar (UTC+8)
//!
//! - **Application** (`application/`): `DivinationService` orchestrating the
//!   time, manual and name modes
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use liuyao::{ChineseCalendar, DivinationService};
//!
//! let service = DivinationService::new(Arc::new(ChineseCalendar::new()));
//! let result = service.time(None)?;
//! println!("{} → {}", result.original.name, result.changed.name);
//! ```

pub mod application;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use application::{parse_line_specs, DivinationRequest, DivinationService, TrigramNames};
pub use domain::{
    Branch, CalendarReading, DivinationMode, DivinationResult, DomainError, FourPillars,
    GuardianSpirit, Hexagram, HexagramBinary, HexagramName, Kinship, LineDetail, LineKind,
    LineRole, LineSpec, LunarDate, MovingLineSet, Pillar, QueryTime, Stem, Trigram,
};
pub use ports::CalendarConverter;
pub use services::{parse_civil_time, ChineseCalendar};
