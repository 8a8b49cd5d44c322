//! Value Objects
//!
//! Immutable symbols of the divination domain.

mod binary;
mod branch;
mod kinship;
mod line;
mod mode;
mod role;
mod spirit;
mod stem;
mod trigram;

pub use binary::*;
pub use branch::*;
pub use kinship::*;
pub use line::*;
pub use mode::*;
pub use role::*;
pub use spirit::*;
pub use stem::*;
pub use trigram::*;
