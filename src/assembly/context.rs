//! Assembly state shared by the date policies.

use chrono::{NaiveDate, NaiveTime};

use crate::error::ScheduleError;
use crate::models::{DateCursor, Fixture, Participant, PlayCalendar, Schedule};
use crate::pairing::{PairingRotator, Sides};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Working state of one generation run.
///
/// Owns the date cursor, the matchday counter and the fixtures emitted so
/// far. Policies drive it through [`step`](Self::step) and
/// [`emit_matchday`](Self::emit_matchday); nothing here outlives the run.
#[derive(Debug)]
pub struct AssemblyContext<'a> {
    participants: &'a [Participant],
    rotator: PairingRotator,
    cursor: DateCursor,
    kickoff: NaiveTime,
    rounds: u32,
    next_matchday: u32,
    fixtures: Vec<Fixture>,
}

impl<'a> AssemblyContext<'a> {
    /// Creates a context with the cursor on the first playable date at or
    /// after `start`.
    pub fn new(
        participants: &'a [Participant],
        calendar: PlayCalendar,
        start: NaiveDate,
        kickoff: NaiveTime,
        rounds: u32,
    ) -> Result<Self, ScheduleError> {
        if participants.len() < 2 {
            return Err(ScheduleError::validation(ValidationError::new(
                ValidationErrorKind::TooFewParticipants,
                format!(
                    "At least 2 participants are required. Currently have {}",
                    participants.len()
                ),
            )));
        }

        Ok(Self {
            participants,
            rotator: PairingRotator::new(participants.len()),
            cursor: DateCursor::start(calendar, start)?,
            kickoff,
            rounds,
            next_matchday: 1,
            fixtures: Vec::new(),
        })
    }

    /// Number of participants.
    #[inline]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// The participants, in draw order.
    pub fn participants(&self) -> &[Participant] {
        self.participants
    }

    /// Circle-method rotator for the participants.
    pub fn rotator(&self) -> &PairingRotator {
        &self.rotator
    }

    /// Number of rounds to generate.
    #[inline]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Date the cursor rests on.
    #[inline]
    pub fn current_date(&self) -> NaiveDate {
        self.cursor.current()
    }

    /// Matchdays emitted so far.
    pub fn matchdays_emitted(&self) -> u32 {
        self.next_matchday - 1
    }

    /// Moves the cursor `days` forward, then onto the next playable date.
    pub fn step(&mut self, days: u32) -> Result<NaiveDate, ScheduleError> {
        self.cursor.step(days)
    }

    /// Stamps one matchday on the current date.
    ///
    /// Returns the matchday number. Fails if `sides` is empty, refers to an
    /// unknown participant, or pits a participant against itself.
    pub fn emit_matchday(&mut self, round: u32, sides: &[Sides]) -> Result<u32, ScheduleError> {
        if sides.is_empty() {
            return Err(ScheduleError::InvariantViolation(format!(
                "matchday {} of round {round} has no fixtures",
                self.next_matchday
            )));
        }

        let matchday = self.next_matchday;
        let date = self.cursor.current().and_time(self.kickoff);
        let mut emitted = Vec::with_capacity(sides.len());
        for s in sides {
            if s.home == s.away {
                return Err(ScheduleError::InvariantViolation(format!(
                    "participant {} paired with itself on matchday {matchday}",
                    s.home
                )));
            }
            let home = self.participant(s.home)?;
            let away = self.participant(s.away)?;
            emitted.push(Fixture::scheduled(
                matchday,
                round,
                date,
                home.id.as_str(),
                away.id.as_str(),
            ));
        }

        tracing::trace!(matchday, round, %date, fixtures = emitted.len(), "matchday placed");
        self.fixtures.extend(emitted);
        self.next_matchday += 1;
        Ok(matchday)
    }

    /// Consumes the context, returning the generated schedule.
    pub fn finish(self) -> Schedule {
        Schedule::from(self.fixtures)
    }

    fn participant(&self, index: usize) -> Result<&'a Participant, ScheduleError> {
        self.participants.get(index).ok_or_else(|| {
            ScheduleError::InvariantViolation(format!(
                "pairing refers to participant {index} of {}",
                self.participants.len()
            ))
        })
    }
}
