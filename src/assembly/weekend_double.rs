//! Weekend-double placement.
//!
//! Built for small leagues that play a full mutual round on each of two
//! consecutive days. Every unordered pair meets on day one with the
//! first-listed participant at home, then again on the next playable day
//! with sides swapped. Each day is one matchday, so round r holds
//! matchdays 2r−1 and 2r.

use super::{AssemblyContext, DatePolicy};
use crate::error::ScheduleError;
use crate::models::WeekendDoubleParams;
use crate::pairing::{all_pairs, first_at_home, Sides};

impl DatePolicy for WeekendDoubleParams {
    fn name(&self) -> &'static str {
        "WEEKEND_DOUBLE"
    }

    fn assign_dates(&self, ctx: &mut AssemblyContext<'_>) -> Result<(), ScheduleError> {
        let day_one: Vec<Sides> = all_pairs(ctx.participant_count())
            .iter()
            .map(first_at_home)
            .collect();
        let day_two: Vec<Sides> = day_one.iter().map(|s| s.swapped()).collect();

        for round in 1..=ctx.rounds() {
            if round > 1 {
                ctx.step(self.days_between_rounds)?;
            }
            ctx.emit_matchday(round, &day_one)?;
            ctx.step(1)?;
            ctx.emit_matchday(round, &day_two)?;
        }
        Ok(())
    }

    fn description(&self) -> &'static str {
        "Full round on two consecutive days, sides swapped on day two"
    }
}
