//! Calendar Converter Port
//!
//! Abstract interface for turning a civil moment into its lunar date and
//! four pillars.

use chrono::NaiveDateTime;

use crate::domain::entities::CalendarReading;
use crate::domain::errors::DomainError;

/// Service interface for lunisolar calendar conversion
///
/// Civil times are naive China Standard Time (UTC+8).
pub trait CalendarConverter: Send + Sync {
    /// Lunar date and pillars of a civil moment
    fn convert(&self, at: NaiveDateTime) -> Result<CalendarReading, DomainError>;

    /// Present moment in the converter's civil time zone
    fn current_time(&self) -> NaiveDateTime;
}
