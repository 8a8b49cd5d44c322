//! Liu Yao API Routes
//!
//! - /divination - Time-based divination (legacy)
//! - /enhanced-divination - Time, manual (手动) or name (卦名) divination

pub mod divination;
pub mod swagger;
