//! Fixture scheduling domain models.
//!
//! Provides the core data types for describing a league schedule request
//! and its result.
//!
//! # Domain Mappings
//!
//! | u-fixture | Football | Esports | Chess club |
//! |-----------|----------|---------|------------|
//! | Participant | Team | Roster | Player |
//! | Fixture | Match | Series | Game |
//! | Matchday | Gameweek | Match week | Evening |
//! | Round | Half-season | Split | Cycle |

mod calendar;
mod fixture;
mod participant;
mod policy;
mod schedule;

pub use calendar::{
    next_weekday_after, weekday_from_index, weekday_index, DateCursor, PlayCalendar, WeekdaySet,
    MIN_LOOKAHEAD_DAYS,
};
pub use fixture::{Fixture, FixtureStatus};
pub use participant::{participants_from_ids, Participant};
pub use policy::{CustomParams, Policy, PolicyKind, TraditionalParams, WeekendDoubleParams};
pub use schedule::Schedule;
