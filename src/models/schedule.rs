//! Schedule (generated fixture list) model.
//!
//! A schedule is the ordered output of one generation run. Fixtures are
//! ordered by matchday, and within a matchday by the order the policy
//! emitted them. The whole list replaces any previously stored fixtures
//! for the competition; it is never merged.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::Fixture;

/// A complete generated schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    /// Fixtures in matchday order.
    pub fixtures: Vec<Fixture>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fixture.
    pub fn add_fixture(&mut self, fixture: Fixture) {
        self.fixtures.push(fixture);
    }

    /// Number of fixtures.
    pub fn fixture_count(&self) -> usize {
        self.fixtures.len()
    }

    /// Whether the schedule holds no fixtures.
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Iterates fixtures in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fixture> {
        self.fixtures.iter()
    }

    /// Highest matchday number (0 when empty).
    pub fn matchday_count(&self) -> u32 {
        self.fixtures.iter().map(|f| f.matchday).max().unwrap_or(0)
    }

    /// Highest round number (0 when empty).
    pub fn round_count(&self) -> u32 {
        self.fixtures.iter().map(|f| f.round).max().unwrap_or(0)
    }

    /// All fixtures of a matchday.
    pub fn fixtures_for_matchday(&self, matchday: u32) -> Vec<&Fixture> {
        self.fixtures
            .iter()
            .filter(|f| f.matchday == matchday)
            .collect()
    }

    /// All fixtures of a round.
    pub fn fixtures_for_round(&self, round: u32) -> Vec<&Fixture> {
        self.fixtures.iter().filter(|f| f.round == round).collect()
    }

    /// All fixtures a participant plays in.
    pub fn fixtures_for_participant(&self, participant_id: &str) -> Vec<&Fixture> {
        self.fixtures
            .iter()
            .filter(|f| f.involves(participant_id))
            .collect()
    }

    /// All meetings between two participants, either side at home.
    pub fn meetings(&self, a: &str, b: &str) -> Vec<&Fixture> {
        self.fixtures
            .iter()
            .filter(|f| (f.home_id == a && f.away_id == b) || (f.home_id == b && f.away_id == a))
            .collect()
    }

    /// Kick-off of a matchday.
    ///
    /// Every fixture of a matchday shares one date, so the first is used.
    pub fn matchday_date(&self, matchday: u32) -> Option<NaiveDateTime> {
        self.fixtures
            .iter()
            .find(|f| f.matchday == matchday)
            .map(|f| f.date)
    }

    /// Earliest kick-off.
    pub fn first_date(&self) -> Option<NaiveDateTime> {
        self.fixtures.iter().map(|f| f.date).min()
    }

    /// Latest kick-off.
    pub fn last_date(&self) -> Option<NaiveDateTime> {
        self.fixtures.iter().map(|f| f.date).max()
    }

    /// Fixtures with a recorded result.
    pub fn played_count(&self) -> usize {
        self.fixtures.iter().filter(|f| f.is_played()).count()
    }

    /// Consumes the schedule, returning the fixture list.
    pub fn into_fixtures(self) -> Vec<Fixture> {
        self.fixtures
    }
}

impl From<Vec<Fixture>> for Schedule {
    fn from(fixtures: Vec<Fixture>) -> Self {
        Self { fixtures }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Fixture;
    type IntoIter = std::slice::Iter<'a, Fixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.fixtures.iter()
    }
}
