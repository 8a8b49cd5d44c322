//! Domain Entities
//!
//! Values produced per divination request.
//! - Pillar / FourPillars: sexagenary labels of the moment
//! - LunarDate / CalendarReading / QueryTime: calendar context
//! - Hexagram / LineDetail: resolved figures
//! - DivinationResult: the assembled answer

mod divination;
mod hexagram;
mod lunar;
mod pillar;

pub use divination::*;
pub use hexagram::*;
pub use lunar::*;
pub use pillar::*;
