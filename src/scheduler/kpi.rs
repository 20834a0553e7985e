//! Schedule quality metrics (KPIs).
//!
//! Computes fairness and calendar indicators from a generated schedule
//! and its participants.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fixture / matchday / round counts | Size of the schedule |
//! | First / last date | Earliest and latest kick-off |
//! | Span | Calendar days from first to last date, inclusive |
//! | Home / away counts | Per participant |
//! | Max imbalance | Largest \|home − away\| over participants |
//! | Rest matchdays | Matchdays on which a participant has no fixture |
//!
//! # Reference
//! Kendall et al. (2010), "Scheduling in sports", §2: fairness measures

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::{Participant, Schedule};

/// Per-participant fixture counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticipantLoad {
    /// Fixtures played at home.
    pub home: usize,
    /// Fixtures played away.
    pub away: usize,
    /// Matchdays without a fixture.
    pub rest_matchdays: u32,
}

impl ParticipantLoad {
    /// Total fixtures.
    pub fn total(&self) -> usize {
        self.home + self.away
    }

    /// Absolute home/away difference.
    pub fn imbalance(&self) -> usize {
        self.home.abs_diff(self.away)
    }
}

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Number of fixtures.
    pub fixture_count: usize,
    /// Number of matchdays.
    pub matchday_count: u32,
    /// Number of rounds.
    pub round_count: u32,
    /// Earliest kick-off.
    pub first_date: Option<NaiveDateTime>,
    /// Latest kick-off.
    pub last_date: Option<NaiveDateTime>,
    /// Calendar days covered, first and last day included.
    pub span_days: i64,
    /// Per-participant loads, keyed by participant ID.
    pub load_by_participant: HashMap<String, ParticipantLoad>,
    /// Largest home/away imbalance of any participant.
    pub max_imbalance: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its participants.
    ///
    /// Participants absent from the schedule appear with zero fixtures and
    /// every matchday counted as rest.
    pub fn calculate(schedule: &Schedule, participants: &[Participant]) -> Self {
        let matchday_count = schedule.matchday_count();
        let mut load_by_participant: HashMap<String, ParticipantLoad> = participants
            .iter()
            .map(|p| (p.id.clone(), ParticipantLoad::default()))
            .collect();
        let mut active: HashMap<&str, Vec<u32>> = HashMap::new();

        for fixture in schedule {
            load_by_participant
                .entry(fixture.home_id.clone())
                .or_default()
                .home += 1;
            load_by_participant
                .entry(fixture.away_id.clone())
                .or_default()
                .away += 1;
            active
                .entry(fixture.home_id.as_str())
                .or_default()
                .push(fixture.matchday);
            active
                .entry(fixture.away_id.as_str())
                .or_default()
                .push(fixture.matchday);
        }

        for (id, load) in load_by_participant.iter_mut() {
            let played = active.get_mut(id.as_str()).map_or(0, |days| {
                days.sort_unstable();
                days.dedup();
                days.len() as u32
            });
            load.rest_matchdays = matchday_count.saturating_sub(played);
        }

        let first_date = schedule.first_date();
        let last_date = schedule.last_date();
        let span_days = match (first_date, last_date) {
            (Some(first), Some(last)) => (last.date() - first.date()).num_days() + 1,
            _ => 0,
        };
        let max_imbalance = load_by_participant
            .values()
            .map(ParticipantLoad::imbalance)
            .max()
            .unwrap_or(0);

        Self {
            fixture_count: schedule.fixture_count(),
            matchday_count,
            round_count: schedule.round_count(),
            first_date,
            last_date,
            span_days,
            load_by_participant,
            max_imbalance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{participants_from_ids, Fixture, Policy};
    use crate::scheduler::{FixtureScheduler, ScheduleRequest};
    use chrono::NaiveDate;

    fn at(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, d)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_kpi_basic() {
        let participants = participants_from_ids(["A", "B", "C"]);
        let mut schedule = Schedule::new();
        schedule.add_fixture(Fixture::scheduled(1, 1, at(2), "A", "B"));
        schedule.add_fixture(Fixture::scheduled(2, 1, at(3), "C", "A"));
        schedule.add_fixture(Fixture::scheduled(3, 1, at(5), "B", "C"));

        let kpi = ScheduleKpi::calculate(&schedule, &participants);
        assert_eq!(kpi.fixture_count, 3);
        assert_eq!(kpi.matchday_count, 3);
        assert_eq!(kpi.round_count, 1);
        assert_eq!(kpi.first_date, Some(at(2)));
        assert_eq!(kpi.last_date, Some(at(5)));
        assert_eq!(kpi.span_days, 4);

        let a = kpi.load_by_participant["A"];
        assert_eq!((a.home, a.away, a.rest_matchdays), (1, 1, 1));
        assert_eq!(kpi.max_imbalance, 0);
    }

    #[test]
    fn test_kpi_imbalance() {
        let participants = participants_from_ids(["A", "B"]);
        let mut schedule = Schedule::new();
        schedule.add_fixture(Fixture::scheduled(1, 1, at(2), "A", "B"));
        schedule.add_fixture(Fixture::scheduled(2, 2, at(9), "A", "B"));

        let kpi = ScheduleKpi::calculate(&schedule, &participants);
        assert_eq!(kpi.max_imbalance, 2);
        assert_eq!(kpi.span_days, 8);
    }

    #[test]
    fn test_kpi_empty_schedule() {
        let participants = participants_from_ids(["A", "B"]);
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &participants);
        assert_eq!(kpi.fixture_count, 0);
        assert_eq!(kpi.span_days, 0);
        assert_eq!(kpi.load_by_participant["B"], ParticipantLoad::default());
    }

    #[test]
    fn test_double_round_is_balanced() {
        // Two cycles replay each other reversed, so home and away even out
        let participants = participants_from_ids(["A", "B", "C", "D", "E", "F"]);
        let request = ScheduleRequest::new(
            participants.clone(),
            Policy::traditional(7, 5),
            NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
        )
        .with_rounds(2);
        let schedule = FixtureScheduler::new().generate(&request).unwrap();

        let kpi = ScheduleKpi::calculate(&schedule, &participants);
        assert_eq!(kpi.max_imbalance, 0);
        for load in kpi.load_by_participant.values() {
            assert_eq!(load.total(), 10);
            assert_eq!(load.rest_matchdays, 0);
        }
    }

    #[test]
    fn test_odd_count_rest_matchdays() {
        let participants = participants_from_ids(["A", "B", "C", "D", "E"]);
        let request = ScheduleRequest::new(
            participants.clone(),
            Policy::custom(1, 2, 1),
            NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
        );
        let schedule = FixtureScheduler::new().generate(&request).unwrap();

        let kpi = ScheduleKpi::calculate(&schedule, &participants);
        // One bye per participant per cycle
        for load in kpi.load_by_participant.values() {
            assert_eq!(load.rest_matchdays, 1);
            assert_eq!(load.total(), 4);
        }
    }
}
