//! Traditional placement.
//!
//! Each round is one full circle-method cycle. The cycle's fixtures are
//! pooled in rotation order and cut into `match_days_per_round` chunks of
//! ⌈pool / match_days_per_round⌉ fixtures; each chunk is one matchday on
//! the next playable day. Sides follow the balancer with the round as the
//! cycle index, so even rounds replay odd rounds with every fixture reversed.

use super::{AssemblyContext, DatePolicy};
use crate::error::ScheduleError;
use crate::models::TraditionalParams;
use crate::pairing::{sides_for, Sides};

impl DatePolicy for TraditionalParams {
    fn name(&self) -> &'static str {
        "TRADITIONAL"
    }

    fn assign_dates(&self, ctx: &mut AssemblyContext<'_>) -> Result<(), ScheduleError> {
        let pairings = ctx.rotator().cycle_pairings();
        let days = self.match_days_per_round.max(1) as usize;
        let chunk_size = pairings.len().div_ceil(days).max(1);

        for round in 1..=ctx.rounds() {
            if round > 1 {
                ctx.step(self.days_between_rounds)?;
            }
            let cycle_index = (round - 1) as usize;
            let pool: Vec<Sides> = pairings
                .iter()
                .map(|p| sides_for(p, cycle_index))
                .collect();

            for (i, chunk) in pool.chunks(chunk_size).enumerate() {
                if i > 0 {
                    ctx.step(1)?;
                }
                ctx.emit_matchday(round, chunk)?;
            }
        }
        Ok(())
    }

    fn description(&self) -> &'static str {
        "One round-robin cycle per round, spread over consecutive days"
    }
}
