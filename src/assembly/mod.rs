//! Date placement policies.
//!
//! A date policy takes the pairings of each round and places them on the
//! calendar, numbering matchdays and rounds as it goes. All policies work
//! through an [`AssemblyContext`], which owns the date cursor and the
//! matchday counter, so the numbering rules hold whichever policy runs:
//!
//! - matchdays are numbered 1, 2, 3, … across the whole schedule;
//! - all fixtures of a matchday share one date;
//! - round numbers rise by one per outer iteration.
//!
//! # Policies
//!
//! | Policy | Matchday unit | Pairings from |
//! |--------|---------------|---------------|
//! | [`WeekendDoubleParams`](crate::models::WeekendDoubleParams) | one full mutual round | all-pairs listing |
//! | [`TraditionalParams`](crate::models::TraditionalParams) | a chunk of the round's pool | rotator cycle |
//! | [`CustomParams`](crate::models::CustomParams) | one rotation | rotator cycle |
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in sports"
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

mod context;
mod custom;
mod traditional;
mod weekend_double;

pub use context::AssemblyContext;

use std::fmt::Debug;

use crate::error::ScheduleError;
use crate::models::Policy;

/// Places a schedule's pairings on the calendar.
///
/// Implementations must emit every fixture through
/// [`AssemblyContext::emit_matchday`] and advance the date only through
/// [`AssemblyContext::step`].
pub trait DatePolicy: Send + Sync + Debug {
    /// Policy name (e.g., "TRADITIONAL").
    fn name(&self) -> &'static str;

    /// Generates every round into the context.
    fn assign_dates(&self, ctx: &mut AssemblyContext<'_>) -> Result<(), ScheduleError>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

impl DatePolicy for Policy {
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn assign_dates(&self, ctx: &mut AssemblyContext<'_>) -> Result<(), ScheduleError> {
        match self {
            Policy::WeekendDouble(p) => p.assign_dates(ctx),
            Policy::Traditional(p) => p.assign_dates(ctx),
            Policy::Custom(p) => p.assign_dates(ctx),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Policy::WeekendDouble(p) => p.description(),
            Policy::Traditional(p) => p.description(),
            Policy::Custom(p) => p.description(),
        }
    }
}
