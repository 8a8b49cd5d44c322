//! DivinationResult - Outcome of one casting

use serde::{Deserialize, Serialize};

use super::hexagram::Hexagram;
use super::lunar::QueryTime;
use crate::domain::value_objects::{DivinationMode, MovingLineSet};

/// Original (本卦) and changed (变卦) hexagram pair with its context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivinationResult {
    pub mode: DivinationMode,
    pub query_time: QueryTime,
    pub original: Hexagram,
    pub changed: Hexagram,
    pub moving_lines: MovingLineSet,
}

impl DivinationResult {
    /// Whether the casting produced any change at all
    pub fn is_static(&self) -> bool {
        self.moving_lines.is_empty()
    }
}
