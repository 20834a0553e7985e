//! Fixture (scheduled match) model.
//!
//! A fixture is one dated meeting between a home and an away participant.
//! It is the record handed to persistence and the unit every query in
//! [`Schedule`](super::Schedule) works on.
//!
//! # Result Invariant
//! Scores are both present or both absent, and the status is `Played`
//! exactly when they are present. The score fields are private so the
//! invariant can only change through [`Fixture::record_result`] and
//! [`Fixture::clear_result`].

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Lifecycle state of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixtureStatus {
    /// Not yet played; no scores.
    Scheduled,
    /// Played; both scores recorded.
    Played,
}

/// A dated match between two participants.
///
/// Serializes to the record shape the league API stores and returns:
/// `matchday`, `round`, `date`, `homeTeamId`, `awayTeamId`, `status`,
/// `homeScore`, `awayScore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    /// Matchday number (1-based, consecutive across the schedule).
    pub matchday: u32,
    /// Round number (1-based).
    pub round: u32,
    /// Kick-off date and time.
    pub date: NaiveDateTime,
    /// Home participant ID.
    #[serde(rename = "homeTeamId")]
    pub home_id: String,
    /// Away participant ID.
    #[serde(rename = "awayTeamId")]
    pub away_id: String,
    status: FixtureStatus,
    home_score: Option<u32>,
    away_score: Option<u32>,
}

impl Fixture {
    /// Creates an unplayed fixture.
    ///
    /// `home_id` and `away_id` must differ. The generator guarantees this;
    /// direct callers are checked only in debug builds.
    pub fn scheduled(
        matchday: u32,
        round: u32,
        date: NaiveDateTime,
        home_id: impl Into<String>,
        away_id: impl Into<String>,
    ) -> Self {
        let home_id = home_id.into();
        let away_id = away_id.into();
        debug_assert_ne!(home_id, away_id, "a fixture needs two different participants");
        Self {
            matchday,
            round,
            date,
            home_id,
            away_id,
            status: FixtureStatus::Scheduled,
            home_score: None,
            away_score: None,
        }
    }

    /// Current status.
    #[inline]
    pub fn status(&self) -> FixtureStatus {
        self.status
    }

    /// Whether a result has been recorded.
    #[inline]
    pub fn is_played(&self) -> bool {
        self.status == FixtureStatus::Played
    }

    /// The recorded (home, away) score, if played.
    pub fn score(&self) -> Option<(u32, u32)> {
        self.home_score.zip(self.away_score)
    }

    /// Records a final score and marks the fixture played.
    pub fn record_result(&mut self, home_score: u32, away_score: u32) {
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.status = FixtureStatus::Played;
    }

    /// Removes the result and returns the fixture to `Scheduled`.
    pub fn clear_result(&mut self) {
        self.home_score = None;
        self.away_score = None;
        self.status = FixtureStatus::Scheduled;
    }

    /// Applies a nullable score pair as sent by the result form.
    ///
    /// Both present records the result, both absent clears it. A single
    /// score is rejected and leaves the fixture unchanged.
    pub fn apply_result(
        &mut self,
        home_score: Option<u32>,
        away_score: Option<u32>,
    ) -> Result<(), ValidationError> {
        match (home_score, away_score) {
            (Some(home), Some(away)) => {
                self.record_result(home, away);
                Ok(())
            }
            (None, None) => {
                self.clear_result();
                Ok(())
            }
            _ => Err(ValidationError::new(
                ValidationErrorKind::IncompleteResult,
                format!(
                    "Fixture {} vs {} needs both scores or neither",
                    self.home_id, self.away_id
                ),
            )),
        }
    }

    /// Whether the participant plays in this fixture.
    pub fn involves(&self, participant_id: &str) -> bool {
        self.home_id == participant_id || self.away_id == participant_id
    }

    /// The other side of the fixture, if the participant plays in it.
    pub fn opponent_of(&self, participant_id: &str) -> Option<&str> {
        if self.home_id == participant_id {
            Some(&self.away_id)
        } else if self.away_id == participant_id {
            Some(&self.home_id)
        } else {
            None
        }
    }

    /// Whether both fixtures are between the same two participants,
    /// regardless of sides.
    pub fn same_pairing(&self, other: &Fixture) -> bool {
        (self.home_id == other.home_id && self.away_id == other.away_id)
            || (self.home_id == other.away_id && self.away_id == other.home_id)
    }

    /// Whether `other` is this fixture with the sides swapped.
    pub fn is_reverse_of(&self, other: &Fixture) -> bool {
        self.home_id == other.away_id && self.away_id == other.home_id
    }
}
