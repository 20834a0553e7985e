//! Fixture generation error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::WeekdaySet;
use crate::validation::ValidationError;

/// Errors that can occur during fixture generation.
///
/// Every variant describes a caller-configuration problem or an internal
/// assertion failure. None of them is transient, so nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The request failed validation. Carries every problem found.
    #[error("Invalid schedule request: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// The excluded weekdays leave no playable day within the lookahead.
    #[error(
        "No playable date within {lookahead_days} days of {from} (excluded weekdays: {excluded})"
    )]
    ConfigurationDeadlock {
        /// Date the cursor was trying to settle from.
        from: NaiveDate,
        /// Iteration cap that was exhausted.
        lookahead_days: u32,
        /// The offending exclusion set.
        excluded: WeekdaySet,
    },

    /// Date arithmetic overflow.
    #[error("Date arithmetic overflow: {reason}")]
    DateOverflow {
        /// Reason for the overflow.
        reason: String,
    },

    /// An internal assertion failed. Indicates a bug, not bad input.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScheduleError {
    /// Wraps a single validation error.
    pub fn validation(error: ValidationError) -> Self {
        Self::Validation(vec![error])
    }

    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_message_joins_all_errors() {
        let err = ScheduleError::Validation(vec![
            ValidationError::new(ValidationErrorKind::TooFewParticipants, "need 2"),
            ValidationError::new(ValidationErrorKind::InvalidRoundCount, "rounds is 0"),
        ]);
        assert_eq!(err.to_string(), "Invalid schedule request: need 2; rounds is 0");
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_deadlock_message() {
        let err = ScheduleError::ConfigurationDeadlock {
            from: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            lookahead_days: 7,
            excluded: WeekdaySet::all(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2026-01-02"));
        assert!(msg.contains("7 days"));
        assert!(err.validation_errors().is_empty());
    }
}
