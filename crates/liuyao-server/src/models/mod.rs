//! Liu Yao API Data Models
//!
//! - Divination requests (time / manual / name)
//! - Divination responses (query time, hexagrams, lines)

mod divination;

pub use divination::*;
