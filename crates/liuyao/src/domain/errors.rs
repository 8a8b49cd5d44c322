//! Domain Errors
//!
//! Error types for divination operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid heavenly stem: {0}")]
    InvalidStem(String),

    #[error("Invalid earthly branch: {0}")]
    InvalidBranch(String),

    #[error("Unknown trigram: {0}")]
    UnknownTrigram(String),

    #[error("Trigram index out of range: {0} (expected 0-7)")]
    InvalidTrigramIndex(u8),

    #[error("Invalid hexagram binary: {0}")]
    InvalidBinary(String),

    #[error("Line position out of range: {0} (expected 1-6)")]
    InvalidLinePosition(u8),

    #[error("Invalid line specification: {0}")]
    InvalidLineSpec(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Invalid date-time: {0}")]
    InvalidTime(String),

    #[error("Date outside supported calendar range: {0}")]
    CalendarOutOfRange(String),

    #[error("Calendar conversion error: {0}")]
    Calendar(String),
}

impl DomainError {
    pub fn missing<T: AsRef<str>>(what: T) -> Self {
        Self::MissingInput(what.as_ref().to_string())
    }

    /// Whether the error was caused by the caller's input rather than by
    /// the engine itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingInput(_)
                | Self::InvalidLineSpec(_)
                | Self::InvalidLinePosition(_)
                | Self::InvalidBinary(_)
                | Self::InvalidTime(_)
                | Self::CalendarOutOfRange(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(DomainError::missing("manual_yaos").is_client_error());
        assert!(DomainError::InvalidLineSpec("x".into()).is_client_error());
        assert!(DomainError::InvalidTime("soon".into()).is_client_error());
        assert!(!DomainError::InvalidBranch("x".into()).is_client_error());
        assert!(!DomainError::Calendar("boom".into()).is_client_error());
    }

    #[test]
    fn test_missing_message() {
        let err = DomainError::missing("upper_original");
        assert_eq!(err.to_string(), "Missing input: upper_original");
    }
}
