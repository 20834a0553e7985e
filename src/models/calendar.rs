//! Play calendar and date cursor.
//!
//! Defines which days fixtures may be played on and how the schedule
//! walks forward through them.
//!
//! # Weekday Model
//! Weekdays are numbered 0=Sunday..6=Saturday, the numbering the league
//! front end uses for its "off days" toggles.
//!
//! # Termination
//! Any seven consecutive dates cover every weekday, so a search for the next
//! playable date either succeeds within seven steps or never does. The
//! search is capped at `lookahead_days` and reports
//! [`ScheduleError::ConfigurationDeadlock`] instead of looping.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Minimum lookahead that can find any playable weekday.
pub const MIN_LOOKAHEAD_DAYS: u32 = 7;

const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Maps a 0=Sunday..6=Saturday index to a weekday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    WEEKDAYS_FROM_SUNDAY.get(usize::from(index)).copied()
}

/// Index of a weekday in the 0=Sunday..6=Saturday numbering.
#[inline]
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// First date strictly after `reference` that falls on `weekday`.
///
/// A reference that already falls on `weekday` yields the following week.
pub fn next_weekday_after(
    reference: NaiveDate,
    weekday: Weekday,
) -> Result<NaiveDate, ScheduleError> {
    let from = reference.weekday().num_days_from_sunday();
    let target = weekday.num_days_from_sunday();
    let mut ahead = (target + 7 - from) % 7;
    if ahead == 0 {
        ahead = 7;
    }
    add_days(reference, ahead)
}

/// A set of weekdays, stored as a 7-bit mask.
///
/// Serializes as a list of 0=Sunday..6=Saturday indices.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WeekdaySet {
    bits: u8,
}

impl WeekdaySet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// All seven weekdays.
    pub const fn all() -> Self {
        Self { bits: 0x7f }
    }

    /// Adds a weekday.
    pub fn with(mut self, weekday: Weekday) -> Self {
        self.insert(weekday);
        self
    }

    /// Adds a weekday in place.
    pub fn insert(&mut self, weekday: Weekday) {
        self.bits |= 1 << weekday_index(weekday);
    }

    /// Builds a set from 0..6 indices.
    ///
    /// Returns the first out-of-range index as the error.
    pub fn from_indices(indices: impl IntoIterator<Item = u8>) -> Result<Self, u8> {
        let mut set = Self::empty();
        for index in indices {
            let weekday = weekday_from_index(index).ok_or(index)?;
            set.insert(weekday);
        }
        Ok(set)
    }

    /// Whether the weekday is in the set.
    #[inline]
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.bits & (1 << weekday_index(weekday)) != 0
    }

    /// Number of weekdays in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether no weekday is in the set.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Whether every weekday is in the set.
    pub fn is_full(&self) -> bool {
        self.bits == Self::all().bits
    }

    /// Weekdays in the set, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEKDAYS_FROM_SUNDAY
            .iter()
            .copied()
            .filter(move |&d| self.contains(d))
    }

    /// The 0..6 indices of the set, ascending.
    pub fn indices(&self) -> Vec<u8> {
        self.iter().map(weekday_index).collect()
    }
}

impl TryFrom<Vec<u8>> for WeekdaySet {
    type Error = String;

    fn try_from(indices: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_indices(indices)
            .map_err(|bad| format!("weekday index {bad} is outside 0..=6"))
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Self {
        set.indices()
    }
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

/// Which dates fixtures may be played on.
///
/// A date is playable iff its weekday is not excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCalendar {
    /// Weekdays on which no fixture may be played.
    pub excluded: WeekdaySet,
    /// Maximum number of dates examined when searching for a playable one.
    pub lookahead_days: u32,
}

impl PlayCalendar {
    /// Creates a calendar with the given exclusions and the minimum lookahead.
    pub fn new(excluded: WeekdaySet) -> Self {
        Self {
            excluded,
            lookahead_days: MIN_LOOKAHEAD_DAYS,
        }
    }

    /// A calendar on which every day is playable.
    pub fn always_playable() -> Self {
        Self::new(WeekdaySet::empty())
    }

    /// Sets the search cap.
    pub fn with_lookahead(mut self, lookahead_days: u32) -> Self {
        self.lookahead_days = lookahead_days;
        self
    }

    /// Whether fixtures may be played on `date`.
    #[inline]
    pub fn is_playable(&self, date: NaiveDate) -> bool {
        !self.excluded.contains(date.weekday())
    }

    /// Earliest playable date at or after `date`.
    ///
    /// Returns `date` itself when it is already playable, so applying this
    /// twice gives the same result as applying it once.
    pub fn next_playable(&self, date: NaiveDate) -> Result<NaiveDate, ScheduleError> {
        let mut candidate = date;
        for _ in 0..self.lookahead_days {
            if self.is_playable(candidate) {
                return Ok(candidate);
            }
            candidate = add_days(candidate, 1)?;
        }

        tracing::warn!(
            from = %date,
            excluded = %self.excluded,
            lookahead_days = self.lookahead_days,
            "no playable date within lookahead"
        );
        Err(ScheduleError::ConfigurationDeadlock {
            from: date,
            lookahead_days: self.lookahead_days,
            excluded: self.excluded,
        })
    }

    /// Adds `days` calendar days, then moves to the next playable date.
    pub fn advance(&self, date: NaiveDate, days: u32) -> Result<NaiveDate, ScheduleError> {
        let shifted = add_days(date, days)?;
        self.next_playable(shifted)
    }
}

impl Default for PlayCalendar {
    fn default() -> Self {
        Self::always_playable()
    }
}

/// A position on a [`PlayCalendar`] that only moves forward.
///
/// Always rests on a playable date.
#[derive(Debug, Clone)]
pub struct DateCursor {
    calendar: PlayCalendar,
    current: NaiveDate,
}

impl DateCursor {
    /// Places the cursor on the first playable date at or after `start`.
    pub fn start(calendar: PlayCalendar, start: NaiveDate) -> Result<Self, ScheduleError> {
        let current = calendar.next_playable(start)?;
        Ok(Self { calendar, current })
    }

    /// The date the cursor rests on.
    #[inline]
    pub fn current(&self) -> NaiveDate {
        self.current
    }

    /// The calendar the cursor walks.
    pub fn calendar(&self) -> &PlayCalendar {
        &self.calendar
    }

    /// Moves `days` calendar days forward, then onto the next playable date.
    ///
    /// Returns the new position.
    pub fn step(&mut self, days: u32) -> Result<NaiveDate, ScheduleError> {
        self.current = self.calendar.advance(self.current, days)?;
        Ok(self.current)
    }
}

fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate, ScheduleError> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| ScheduleError::DateOverflow {
            reason: format!("{date} + {days} days"),
        })
}
