//! Boundary request and response shapes.
//!
//! Mirrors the JSON contract of the web layer this crate serves. Inputs
//! arrive loosely typed (policy as a string, weekdays as integers, optional
//! policy parameters) and are checked and converted here into a
//! [`ScheduleRequest`]. All conversion problems are reported together.
//!
//! ```json
//! {
//!   "policy": "CUSTOM",
//!   "rounds": 2,
//!   "startDate": "2026-01-02",
//!   "offDays": [0],
//!   "daysBetweenMatches": 1,
//!   "playDays": 2,
//!   "restDays": 1
//! }
//! ```

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{
    next_weekday_after, CustomParams, Fixture, Participant, Policy, PolicyKind, TraditionalParams,
    WeekendDoubleParams,
};
use crate::scheduler::{FixtureScheduler, ScheduleRequest};
use crate::validation::parse_off_days;

fn default_rounds() -> u32 {
    1
}

/// Schedule generation input as received at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInput {
    /// Policy name: `WEEKEND_DOUBLE`, `TRADITIONAL` or `CUSTOM`.
    pub policy: String,
    /// Number of rounds.
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    /// First candidate date. Defaults to the next Friday.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Excluded weekdays, 0 = Sunday .. 6 = Saturday.
    #[serde(default)]
    pub off_days: Vec<i64>,
    /// WEEKEND_DOUBLE and TRADITIONAL.
    #[serde(default)]
    pub days_between_rounds: Option<u32>,
    /// TRADITIONAL.
    #[serde(default)]
    pub match_days_per_round: Option<u32>,
    /// CUSTOM.
    #[serde(default)]
    pub days_between_matches: Option<u32>,
    /// CUSTOM.
    #[serde(default)]
    pub play_days: Option<u32>,
    /// CUSTOM.
    #[serde(default)]
    pub rest_days: Option<u32>,
    /// Draw seed.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ScheduleInput {
    /// Resolves the policy name and fills missing parameters with defaults.
    pub fn policy(&self) -> Result<Policy, ScheduleError> {
        let kind: PolicyKind = self.policy.parse().map_err(ScheduleError::validation)?;
        Ok(match kind {
            PolicyKind::WeekendDouble => {
                let d = WeekendDoubleParams::default();
                Policy::weekend_double(self.days_between_rounds.unwrap_or(d.days_between_rounds))
            }
            PolicyKind::Traditional => {
                let d = TraditionalParams::default();
                Policy::traditional(
                    self.days_between_rounds.unwrap_or(d.days_between_rounds),
                    self.match_days_per_round.unwrap_or(d.match_days_per_round),
                )
            }
            PolicyKind::Custom => {
                let d = CustomParams::default();
                Policy::custom(
                    self.days_between_matches.unwrap_or(d.days_between_matches),
                    self.play_days.unwrap_or(d.play_days),
                    self.rest_days.unwrap_or(d.rest_days),
                )
            }
        })
    }

    /// Converts the input into a request for the given participants.
    ///
    /// Without a start date the schedule begins on the first Friday
    /// strictly after `reference_date`. The caller supplies the reference,
    /// so nothing here reads the clock.
    pub fn into_request(
        &self,
        participants: Vec<Participant>,
        reference_date: NaiveDate,
    ) -> Result<ScheduleRequest, ScheduleError> {
        let mut errors = Vec::new();

        let policy = match self.policy() {
            Ok(policy) => Some(policy),
            Err(e) => {
                errors.extend_from_slice(e.validation_errors());
                None
            }
        };
        let excluded = match parse_off_days(&self.off_days) {
            Ok(set) => Some(set),
            Err(e) => {
                errors.extend(e);
                None
            }
        };

        match (policy, excluded) {
            (Some(policy), Some(excluded)) => {
                let start = match self.start_date {
                    Some(date) => date,
                    None => next_weekday_after(reference_date, Weekday::Fri)?,
                };
                let mut request = ScheduleRequest::new(participants, policy, start)
                    .with_rounds(self.rounds)
                    .with_excluded_weekdays(excluded);
                request.seed = self.seed;
                Ok(request)
            }
            _ => {
                tracing::warn!(count = errors.len(), "schedule input rejected");
                Err(ScheduleError::Validation(errors))
            }
        }
    }
}

/// Generation result as returned at the boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    /// Summary line.
    pub message: String,
    /// Every generated fixture, in matchday order.
    pub fixtures: Vec<Fixture>,
}

/// Runs one boundary request end to end.
pub fn generate_schedule(
    scheduler: &FixtureScheduler,
    input: &ScheduleInput,
    participants: Vec<Participant>,
    reference_date: NaiveDate,
) -> Result<ScheduleResponse, ScheduleError> {
    let request = input.into_request(participants, reference_date)?;
    let schedule = scheduler.generate(&request)?;
    Ok(ScheduleResponse {
        message: format!(
            "Schedule generated: {} rounds, {} matchdays, {} fixtures",
            schedule.round_count(),
            schedule.matchday_count(),
            schedule.fixture_count()
        ),
        fixtures: schedule.into_fixtures(),
    })
}

/// Result update for one fixture. Null scores clear the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultInput {
    /// Home score.
    #[serde(default)]
    pub home_score: Option<u32>,
    /// Away score.
    #[serde(default)]
    pub away_score: Option<u32>,
}

impl ResultInput {
    /// Applies the update. A single missing score is rejected.
    pub fn apply_to(&self, fixture: &mut Fixture) -> Result<(), ScheduleError> {
        fixture
            .apply_result(self.home_score, self.away_score)
            .map_err(ScheduleError::validation)
    }
}
