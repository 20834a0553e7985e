//! Fixture generation entry point.
//!
//! # Algorithm
//!
//! 1. Validate configuration and request; collect every problem.
//! 2. Optionally shuffle the draw order with a seeded RNG.
//! 3. Settle the date cursor on the first playable date at or after the
//!    start date.
//! 4. Hand the context to the request's date policy, which walks the
//!    pairings round by round and stamps matchdays.
//!
//! # Complexity
//! O(rounds × N²) for N participants, plus at most `lookahead_days` date
//! probes per cursor step.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::assembly::{AssemblyContext, DatePolicy};
use crate::config::SchedulerConfig;
use crate::error::ScheduleError;
use crate::models::{Participant, PlayCalendar, Policy, Schedule, WeekdaySet};
use crate::validation::validate_request;

/// Input container for fixture generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    /// Participants, in draw order.
    pub participants: Vec<Participant>,
    /// Date placement policy with its parameters.
    pub policy: Policy,
    /// Number of rounds (full round-robin cycles).
    pub rounds: u32,
    /// First candidate date.
    pub start_date: NaiveDate,
    /// Weekdays on which no matchday may fall.
    pub excluded_weekdays: WeekdaySet,
    /// Shuffles the draw order when set.
    pub seed: Option<u64>,
}

impl ScheduleRequest {
    /// Creates a one-round request with no excluded weekdays.
    pub fn new(participants: Vec<Participant>, policy: Policy, start_date: NaiveDate) -> Self {
        Self {
            participants,
            policy,
            rounds: 1,
            start_date,
            excluded_weekdays: WeekdaySet::empty(),
            seed: None,
        }
    }

    /// Sets the round count.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the excluded weekdays.
    pub fn with_excluded_weekdays(mut self, excluded: WeekdaySet) -> Self {
        self.excluded_weekdays = excluded;
        self
    }

    /// Sets the draw seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Participants in the order pairings are drawn from.
    ///
    /// Without a seed this is the declared order.
    pub fn draw_order(&self) -> Vec<Participant> {
        let mut order = self.participants.clone();
        if let Some(seed) = self.seed {
            let mut rng = StdRng::seed_from_u64(seed);
            order.shuffle(&mut rng);
        }
        order
    }
}

/// League fixture generator.
///
/// Holds only configuration, so one instance can serve any number of
/// requests, concurrently if needed. Each call to
/// [`generate`](Self::generate) is a fresh, all-or-nothing run: it returns
/// the complete schedule or an error, never a partial list.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_fixture::models::{participants_from_ids, Policy};
/// use u_fixture::scheduler::{FixtureScheduler, ScheduleRequest};
///
/// let request = ScheduleRequest::new(
///     participants_from_ids(["A", "B", "C", "D"]),
///     Policy::traditional(7, 1),
///     NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
/// )
/// .with_rounds(2);
///
/// let schedule = FixtureScheduler::new().generate(&request).unwrap();
/// assert_eq!(schedule.fixture_count(), 12);
/// assert_eq!(schedule.round_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureScheduler {
    config: SchedulerConfig,
}

impl FixtureScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with the given configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates the complete schedule for a request.
    ///
    /// # Errors
    /// - [`ScheduleError::Validation`] with every input problem found
    /// - [`ScheduleError::ConfigurationDeadlock`] when the excluded weekdays
    ///   leave no playable date within the lookahead
    /// - [`ScheduleError::DateOverflow`] when dates leave chrono's range
    /// - [`ScheduleError::Config`] for an invalid configuration
    pub fn generate(&self, request: &ScheduleRequest) -> Result<Schedule, ScheduleError> {
        self.config.validate()?;

        if let Err(errors) = validate_request(request, &self.config) {
            tracing::warn!(count = errors.len(), "schedule request rejected");
            return Err(ScheduleError::Validation(errors));
        }

        tracing::debug!(
            policy = request.policy.name(),
            participants = request.participants.len(),
            rounds = request.rounds,
            start = %request.start_date,
            excluded = %request.excluded_weekdays,
            "generating schedule"
        );

        let draw = request.draw_order();
        let calendar = PlayCalendar::new(request.excluded_weekdays)
            .with_lookahead(self.config.lookahead_days);
        let mut ctx = AssemblyContext::new(
            &draw,
            calendar,
            request.start_date,
            self.config.kickoff_time,
            request.rounds,
        )?;
        request.policy.assign_dates(&mut ctx)?;
        let schedule = ctx.finish();

        tracing::debug!(
            fixtures = schedule.fixture_count(),
            matchdays = schedule.matchday_count(),
            "schedule generated"
        );
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{participants_from_ids, Fixture, FixtureStatus, PolicyKind};
    use crate::validation::ValidationErrorKind;
    use chrono::{Datelike, NaiveTime, Weekday};

    // 2026-01-02 is a Friday.
    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
    }

    fn request(n: usize, policy: Policy) -> ScheduleRequest {
        let ids: Vec<String> = (1..=n).map(|i| format!("team-{i}")).collect();
        ScheduleRequest::new(participants_from_ids(ids), policy, friday())
    }

    fn assert_well_formed(fixtures: &[Fixture]) {
        let mut expected_matchday = 1;
        let mut last_round = 0;
        for (i, f) in fixtures.iter().enumerate() {
            assert_ne!(f.home_id, f.away_id);
            assert_eq!(f.status(), FixtureStatus::Scheduled);
            assert!(f.matchday == expected_matchday || f.matchday == expected_matchday + 1);
            expected_matchday = f.matchday;
            assert!(f.round >= last_round);
            last_round = f.round;
            if i > 0 && fixtures[i - 1].matchday == f.matchday {
                assert_eq!(fixtures[i - 1].date, f.date);
            }
            if i > 0 {
                assert!(fixtures[i - 1].date <= f.date);
            }
        }
        assert_eq!(fixtures.first().map(|f| f.matchday), Some(1));
    }

    #[test]
    fn test_generate_all_policies() {
        let scheduler = FixtureScheduler::new();
        for kind in PolicyKind::ALL {
            for n in 2..=7 {
                let req = request(n, Policy::default_for(kind)).with_rounds(2);
                let schedule = scheduler.generate(&req).unwrap();
                assert!(!schedule.is_empty(), "{kind} n={n}");
                assert_well_formed(&schedule.fixtures);
            }
        }
    }

    #[test]
    fn test_traditional_fixture_count() {
        let scheduler = FixtureScheduler::new();
        for n in 2..=10 {
            let schedule = scheduler
                .generate(&request(n, Policy::traditional(7, 1)))
                .unwrap();
            assert_eq!(schedule.fixture_count(), n * (n - 1) / 2);
            assert_eq!(schedule.round_count(), 1);
        }
    }

    #[test]
    fn test_kickoff_time_is_stamped() {
        let kickoff = NaiveTime::from_hms_opt(20, 45, 0).unwrap();
        let scheduler =
            FixtureScheduler::with_config(SchedulerConfig::default().with_kickoff_time(kickoff));
        let schedule = scheduler.generate(&request(4, Policy::default())).unwrap();
        assert!(schedule.iter().all(|f| f.date.time() == kickoff));

        let default = FixtureScheduler::new()
            .generate(&request(4, Policy::default()))
            .unwrap();
        assert_eq!(
            default.fixtures[0].date,
            friday().and_hms_opt(18, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_start_date_settles_on_playable_day() {
        let req = request(4, Policy::default())
            .with_excluded_weekdays(WeekdaySet::empty().with(Weekday::Fri).with(Weekday::Sat));
        let schedule = FixtureScheduler::new().generate(&req).unwrap();
        assert_eq!(schedule.first_date().unwrap().date().weekday(), Weekday::Sun);
        assert!(schedule
            .iter()
            .all(|f| !req.excluded_weekdays.contains(f.date.weekday())));
    }

    #[test]
    fn test_all_weekdays_excluded_is_deadlock() {
        let req = request(4, Policy::default()).with_excluded_weekdays(WeekdaySet::all());
        for kind in PolicyKind::ALL {
            let mut req = req.clone();
            req.policy = Policy::default_for(kind);
            let err = FixtureScheduler::new().generate(&req).unwrap_err();
            assert!(
                matches!(err, ScheduleError::ConfigurationDeadlock { .. }),
                "{kind}: {err}"
            );
        }
    }

    #[test]
    fn test_validation_reports_every_problem() {
        let mut req = request(1, Policy::custom(1, 0, 1)).with_rounds(0);
        req.participants.push(Participant::new("team-1"));
        let err = FixtureScheduler::new().generate(&req).unwrap_err();
        let kinds: Vec<_> = err.validation_errors().iter().map(|e| e.kind).collect();
        assert!(kinds.contains(&ValidationErrorKind::DuplicateId));
        assert!(kinds.contains(&ValidationErrorKind::InvalidRoundCount));
        assert!(kinds.contains(&ValidationErrorKind::InvalidParameter));
    }

    #[test]
    fn test_too_few_participants_generates_nothing() {
        let err = FixtureScheduler::new()
            .generate(&request(1, Policy::default()))
            .unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::TooFewParticipants
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let scheduler =
            FixtureScheduler::with_config(SchedulerConfig::default().with_lookahead_days(3));
        assert!(matches!(
            scheduler.generate(&request(4, Policy::default())),
            Err(ScheduleError::Config(_))
        ));
    }

    #[test]
    fn test_regeneration_is_identical() {
        let scheduler = FixtureScheduler::new();
        let req = request(7, Policy::custom(2, 3, 2))
            .with_rounds(3)
            .with_excluded_weekdays(WeekdaySet::empty().with(Weekday::Wed));
        let a = scheduler.generate(&req).unwrap();
        let b = scheduler.generate(&req).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_seeded_draw() {
        let scheduler = FixtureScheduler::new();
        let base = request(8, Policy::traditional(7, 1));
        let seeded = base.clone().with_seed(42);

        let a = scheduler.generate(&seeded).unwrap();
        let b = scheduler.generate(&seeded).unwrap();
        assert_eq!(a, b);

        // Same participants, same pair coverage
        let draw = seeded.draw_order();
        let mut drawn: Vec<&str> = draw.iter().map(|p| p.id.as_str()).collect();
        drawn.sort_unstable();
        let mut declared: Vec<&str> = base.participants.iter().map(|p| p.id.as_str()).collect();
        declared.sort_unstable();
        assert_eq!(drawn, declared);
        assert_eq!(a.fixture_count(), 28);

        assert_eq!(base.draw_order(), base.participants);
    }

    #[test]
    fn test_concurrent_generation() {
        let scheduler = FixtureScheduler::new();
        let requests: Vec<ScheduleRequest> = (2..10)
            .map(|n| request(n, Policy::custom(1, 2, 1)).with_rounds(2))
            .collect();
        let expected: Vec<Schedule> = requests
            .iter()
            .map(|r| scheduler.generate(r).unwrap())
            .collect();

        let shared = &scheduler;
        let results: Vec<Schedule> = std::thread::scope(|s| {
            let handles: Vec<_> = requests
                .iter()
                .map(|r| s.spawn(move || shared.generate(r).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, expected);
    }
}
