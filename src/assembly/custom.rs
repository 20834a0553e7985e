//! Custom play/rest placement.
//!
//! One rotation per matchday. Consecutive matchdays sit
//! `days_between_matches` apart, and every `play_days`-th matchday is
//! followed by `rest_days` extra days off. The play counter runs across
//! round boundaries, so a block of play days may straddle two rounds.

use super::{AssemblyContext, DatePolicy};
use crate::error::ScheduleError;
use crate::models::CustomParams;
use crate::pairing::{sides_for, Sides};

impl CustomParams {
    /// Days from the matchday just played to the next one.
    fn gap_after(&self, played: u32) -> Result<u32, ScheduleError> {
        let play_days = self.play_days.max(1);
        if played % play_days != 0 {
            return Ok(self.days_between_matches);
        }
        self.days_between_matches
            .checked_add(self.rest_days)
            .ok_or_else(|| ScheduleError::DateOverflow {
                reason: format!(
                    "gap of {} + {} days does not fit",
                    self.days_between_matches, self.rest_days
                ),
            })
    }
}

impl DatePolicy for CustomParams {
    fn name(&self) -> &'static str {
        "CUSTOM"
    }

    fn assign_dates(&self, ctx: &mut AssemblyContext<'_>) -> Result<(), ScheduleError> {
        let rotations: Vec<_> = ctx.rotator().cycle().collect();
        let total = u64::from(ctx.rounds()) * rotations.len() as u64;
        let mut played: u32 = 0;

        for round in 1..=ctx.rounds() {
            let cycle_index = (round - 1) as usize;
            for rotation in &rotations {
                let sides: Vec<Sides> = rotation
                    .pairings
                    .iter()
                    .map(|p| sides_for(p, cycle_index))
                    .collect();
                ctx.emit_matchday(round, &sides)?;
                played = played.wrapping_add(1);

                if u64::from(ctx.matchdays_emitted()) < total {
                    let gap = self.gap_after(played)?;
                    ctx.step(gap)?;
                }
            }
        }
        Ok(())
    }

    fn description(&self) -> &'static str {
        "One rotation per matchday with play/rest blocks"
    }
}
