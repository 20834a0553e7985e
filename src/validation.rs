//! Input validation for schedule requests.
//!
//! Checks the structural integrity of a request before any generation
//! begins. Detects:
//! - Fewer than two participants
//! - Empty or duplicate participant IDs
//! - A round count of zero
//! - Policy parameters that must be positive
//! - Requests larger than the configured workload bound
//! - Weekday indices outside 0..=6 (boundary input)
//!
//! All problems are collected in one pass so the caller can fix them
//! together.

use std::collections::HashSet;
use std::fmt;

use crate::config::SchedulerConfig;
use crate::models::WeekdaySet;
use crate::scheduler::ScheduleRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than two participants.
    TooFewParticipants,
    /// Two participants share the same ID.
    DuplicateId,
    /// A participant has an empty ID.
    EmptyId,
    /// Policy name is not one of the recognized values.
    UnknownPolicy,
    /// Round count is zero.
    InvalidRoundCount,
    /// Weekday index outside 0..=6.
    InvalidWeekday,
    /// A policy parameter is out of range.
    InvalidParameter,
    /// rounds × participants, or the projected fixture count, exceeds the
    /// configured bound.
    WorkloadExceeded,
    /// Only one of the two scores was supplied.
    IncompleteResult,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a schedule request against the scheduler configuration.
///
/// Checks:
/// 1. At least two participants
/// 2. No empty participant IDs
/// 3. No duplicate participant IDs
/// 4. At least one round
/// 5. Policy parameters in range
/// 6. `rounds × participants` within `config.max_workload`
/// 7. Projected fixture count within `config.max_fixtures`
///
/// Excluded weekdays are not checked here. A set that blocks every day is
/// reported by the date cursor as a configuration deadlock.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &ScheduleRequest, config: &SchedulerConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if request.participants.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewParticipants,
            format!(
                "At least 2 participants are required. Currently have {}",
                request.participants.len()
            ),
        ));
    }

    let mut ids = HashSet::new();
    for p in &request.participants {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Participant ID must not be empty",
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate participant ID: {}", p.id),
            ));
        }
    }

    if request.rounds == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRoundCount,
            "rounds must be at least 1",
        ));
    }

    errors.extend(request.policy.validate());

    let workload = (request.rounds as usize).saturating_mul(request.participants.len());
    if workload > config.max_workload {
        errors.push(ValidationError::new(
            ValidationErrorKind::WorkloadExceeded,
            format!(
                "rounds × participants = {workload} exceeds the limit of {}",
                config.max_workload
            ),
        ));
    }

    let fixtures = request
        .policy
        .fixture_count(request.participants.len(), request.rounds);
    if fixtures > config.max_fixtures {
        errors.push(ValidationError::new(
            ValidationErrorKind::WorkloadExceeded,
            format!(
                "request would generate {fixtures} fixtures, above the limit of {}",
                config.max_fixtures
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Converts raw 0=Sunday..6=Saturday indices into a weekday set.
///
/// Every out-of-range index is reported.
pub fn parse_off_days(indices: &[i64]) -> Result<WeekdaySet, Vec<ValidationError>> {
    let errors: Vec<ValidationError> = indices
        .iter()
        .filter(|&&i| !(0..=6).contains(&i))
        .map(|i| {
            ValidationError::new(
                ValidationErrorKind::InvalidWeekday,
                format!("Off day {i} is outside 0 (Sunday) ..= 6 (Saturday)"),
            )
        })
        .collect();
    if !errors.is_empty() {
        return Err(errors);
    }

    WeekdaySet::from_indices(indices.iter().map(|&i| i as u8)).map_err(|bad| {
        vec![ValidationError::new(
            ValidationErrorKind::InvalidWeekday,
            format!("Off day {bad} is outside 0 (Sunday) ..= 6 (Saturday)"),
        )]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{participants_from_ids, Participant, Policy};
    use chrono::NaiveDate;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
    }

    fn request(ids: &[&str]) -> ScheduleRequest {
        ScheduleRequest::new(
            participants_from_ids(ids.iter().copied()),
            Policy::traditional(7, 1),
            start(),
        )
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_request() {
        let config = SchedulerConfig::default();
        assert!(validate_request(&request(&["A", "B"]), &config).is_ok());
        assert!(validate_request(&request(&["A", "B", "C", "D", "E"]), &config).is_ok());
    }

    #[test]
    fn test_too_few_participants() {
        let config = SchedulerConfig::default();
        assert_eq!(
            kinds(validate_request(&request(&["A"]), &config)),
            vec![ValidationErrorKind::TooFewParticipants]
        );
        assert!(kinds(validate_request(&request(&[]), &config))
            .contains(&ValidationErrorKind::TooFewParticipants));
    }

    #[test]
    fn test_duplicate_id() {
        let config = SchedulerConfig::default();
        let errors = validate_request(&request(&["A", "B", "A"]), &config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains('A'));
    }

    #[test]
    fn test_empty_id() {
        let config = SchedulerConfig::default();
        let mut req = request(&["A", "B"]);
        req.participants.push(Participant::new("  "));
        assert_eq!(
            kinds(validate_request(&req, &config)),
            vec![ValidationErrorKind::EmptyId]
        );
    }

    #[test]
    fn test_zero_rounds() {
        let config = SchedulerConfig::default();
        let req = request(&["A", "B"]).with_rounds(0);
        assert_eq!(
            kinds(validate_request(&req, &config)),
            vec![ValidationErrorKind::InvalidRoundCount]
        );
    }

    #[test]
    fn test_invalid_policy_parameter() {
        let config = SchedulerConfig::default();
        let mut req = request(&["A", "B"]);
        req.policy = Policy::custom(1, 0, 1);
        assert_eq!(
            kinds(validate_request(&req, &config)),
            vec![ValidationErrorKind::InvalidParameter]
        );
    }

    #[test]
    fn test_workload_bound() {
        let config = SchedulerConfig::default().with_max_workload(10);
        let req = request(&["A", "B", "C", "D"]).with_rounds(3); // 12 > 10
        assert_eq!(
            kinds(validate_request(&req, &config)),
            vec![ValidationErrorKind::WorkloadExceeded]
        );
    }

    #[test]
    fn test_fixture_bound_on_wide_league() {
        // 1000 participants pass the rounds × participants bound but would
        // produce 499 500 fixtures in a single round
        let config = SchedulerConfig::default();
        let ids: Vec<String> = (0..1000).map(|i| format!("P{i}")).collect();
        let req = ScheduleRequest::new(
            participants_from_ids(ids),
            Policy::traditional(7, 1),
            start(),
        );
        let errors = validate_request(&req, &config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::WorkloadExceeded);
        assert!(errors[0].message.contains("499500"));

        let relaxed = config.with_max_fixtures(500_000);
        assert!(validate_request(&req, &relaxed).is_ok());
    }

    #[test]
    fn test_fixture_bound_counts_both_legs() {
        // 10 participants, weekend-double: 45 pairs × 2 legs = 90 per round
        let config = SchedulerConfig::default().with_max_fixtures(100);
        let mut req = request(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
        req.policy = Policy::weekend_double(6);
        assert!(validate_request(&req, &config).is_ok());
        let req = req.with_rounds(2);
        assert_eq!(
            kinds(validate_request(&req, &config)),
            vec![ValidationErrorKind::WorkloadExceeded]
        );
    }

    #[test]
    fn test_multiple_errors() {
        let config = SchedulerConfig::default();
        let req = request(&["A"]).with_rounds(0);
        let errors = validate_request(&req, &config).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_parse_off_days() {
        let set = parse_off_days(&[0, 6, 6]).unwrap();
        assert_eq!(set.indices(), vec![0, 6]);
        assert!(parse_off_days(&[]).unwrap().is_empty());

        let errors = parse_off_days(&[-1, 3, 7]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidWeekday));
    }
}
