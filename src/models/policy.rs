//! Scheduling policies and their parameters.
//!
//! A policy decides how the pairings of each round are spread over the
//! calendar. The three policies share their inputs (participants, round
//! count, start date, excluded weekdays) and differ only in date placement
//! and matchday grouping. Each carries its own parameter set, so a policy
//! value is always complete.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationErrorKind};

/// Policy names as accepted at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyKind {
    /// Full mutual round on two consecutive days, sides swapped on day two.
    WeekendDouble,
    /// One circle-method cycle per round, spread over a fixed number of days.
    Traditional,
    /// One rotation per matchday with a play/rest cadence.
    Custom,
}

impl PolicyKind {
    /// All recognized policies.
    pub const ALL: [PolicyKind; 3] = [Self::WeekendDouble, Self::Traditional, Self::Custom];

    /// Boundary name of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WeekendDouble => "WEEKEND_DOUBLE",
            Self::Traditional => "TRADITIONAL",
            Self::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = ValidationError;

    /// Accepts the exact boundary names only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::UnknownPolicy,
                    format!(
                        "Unknown policy '{s}'. Must be one of: WEEKEND_DOUBLE, TRADITIONAL, CUSTOM"
                    ),
                )
            })
    }
}

/// Parameters of [`Policy::WeekendDouble`].
///
/// The default gap of 6 days keeps every round on the same two weekdays:
/// a Friday start plays Friday and Saturday each week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeekendDoubleParams {
    /// Days from a round's second day to the next round's first day.
    pub days_between_rounds: u32,
}

impl Default for WeekendDoubleParams {
    fn default() -> Self {
        Self {
            days_between_rounds: 6,
        }
    }
}

/// Parameters of [`Policy::Traditional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraditionalParams {
    /// Days from a round's last matchday to the next round's first.
    pub days_between_rounds: u32,
    /// Number of consecutive playable days a round is spread over.
    pub match_days_per_round: u32,
}

impl Default for TraditionalParams {
    fn default() -> Self {
        Self {
            days_between_rounds: 7,
            match_days_per_round: 1,
        }
    }
}

/// Parameters of [`Policy::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomParams {
    /// Gap between consecutive matchdays.
    pub days_between_matches: u32,
    /// Matchdays played before a forced rest.
    pub play_days: u32,
    /// Extra days added after every `play_days` matchdays.
    pub rest_days: u32,
}

impl Default for CustomParams {
    fn default() -> Self {
        Self {
            days_between_matches: 1,
            play_days: 2,
            rest_days: 1,
        }
    }
}

/// A scheduling policy with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Policy {
    /// See [`PolicyKind::WeekendDouble`].
    WeekendDouble(WeekendDoubleParams),
    /// See [`PolicyKind::Traditional`].
    Traditional(TraditionalParams),
    /// See [`PolicyKind::Custom`].
    Custom(CustomParams),
}

impl Policy {
    /// Weekend-double policy.
    pub fn weekend_double(days_between_rounds: u32) -> Self {
        Self::WeekendDouble(WeekendDoubleParams {
            days_between_rounds,
        })
    }

    /// Traditional policy.
    pub fn traditional(days_between_rounds: u32, match_days_per_round: u32) -> Self {
        Self::Traditional(TraditionalParams {
            days_between_rounds,
            match_days_per_round,
        })
    }

    /// Custom policy.
    pub fn custom(days_between_matches: u32, play_days: u32, rest_days: u32) -> Self {
        Self::Custom(CustomParams {
            days_between_matches,
            play_days,
            rest_days,
        })
    }

    /// Policy of the given kind with default parameters.
    pub fn default_for(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::WeekendDouble => Self::WeekendDouble(WeekendDoubleParams::default()),
            PolicyKind::Traditional => Self::Traditional(TraditionalParams::default()),
            PolicyKind::Custom => Self::Custom(CustomParams::default()),
        }
    }

    /// Which policy this is.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::WeekendDouble(_) => PolicyKind::WeekendDouble,
            Self::Traditional(_) => PolicyKind::Traditional,
            Self::Custom(_) => PolicyKind::Custom,
        }
    }

    /// Meetings per pair in one round: two legs for weekend-double,
    /// one otherwise.
    pub fn legs_per_round(&self) -> u64 {
        match self {
            Self::WeekendDouble(_) => 2,
            Self::Traditional(_) | Self::Custom(_) => 1,
        }
    }

    /// Number of fixtures `rounds` rounds of `participants` participants
    /// produce under this policy.
    pub fn fixture_count(&self, participants: usize, rounds: u32) -> u64 {
        let n = participants as u64;
        let pairs = n.saturating_mul(n.saturating_sub(1)) / 2;
        pairs
            .saturating_mul(self.legs_per_round())
            .saturating_mul(u64::from(rounds))
    }

    /// Checks parameters that must be positive.
    ///
    /// Gaps of zero days are allowed; they place consecutive matchdays on
    /// the same date.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        match self {
            Self::WeekendDouble(_) => {}
            Self::Traditional(p) => {
                if p.match_days_per_round == 0 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidParameter,
                        "matchDaysPerRound must be at least 1",
                    ));
                }
            }
            Self::Custom(p) => {
                if p.play_days == 0 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidParameter,
                        "playDays must be at least 1",
                    ));
                }
            }
        }
        errors
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::default_for(PolicyKind::Traditional)
    }
}
