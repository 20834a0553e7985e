//! Home/away side assignment.
//!
//! Sides alternate by pairing slot within a cycle and flip wholesale from
//! one cycle to the next, so the participant in the fixed seat is not
//! always the same side and a second cycle replays the first with every
//! fixture reversed.

use super::Pairing;

/// Home and away participant indices of one fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sides {
    /// Home participant index.
    pub home: usize,
    /// Away participant index.
    pub away: usize,
}

impl Sides {
    /// The same fixture with home and away exchanged.
    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            home: self.away,
            away: self.home,
        }
    }
}

/// Decides which participant of a pairing plays at home.
///
/// The first-listed participant is home exactly when
/// `(cycle_index is even) XOR (slot_index is even)`; otherwise the second is.
/// Pure and deterministic.
///
/// # Example
///
/// ```
/// use u_fixture::pairing::{assign_sides, Pairing};
///
/// let p = Pairing { first: 0, second: 3, slot: 0 };
/// // Even cycle, even slot: XOR is false, so the second participant is home.
/// assert_eq!(assign_sides(&p, 0, 0).home, 3);
/// // The next cycle reverses the fixture.
/// assert_eq!(assign_sides(&p, 1, 0).home, 0);
/// ```
pub fn assign_sides(pairing: &Pairing, cycle_index: usize, slot_index: usize) -> Sides {
    let first_is_home = (cycle_index % 2 == 0) ^ (slot_index % 2 == 0);
    if first_is_home {
        Sides {
            home: pairing.first,
            away: pairing.second,
        }
    } else {
        Sides {
            home: pairing.second,
            away: pairing.first,
        }
    }
}

/// [`assign_sides`] using the pairing's own slot.
#[inline]
pub fn sides_for(pairing: &Pairing, cycle_index: usize) -> Sides {
    assign_sides(pairing, cycle_index, pairing.slot)
}

/// Sides with the first-listed participant at home, ignoring slot and cycle.
#[inline]
pub fn first_at_home(pairing: &Pairing) -> Sides {
    Sides {
        home: pairing.first,
        away: pairing.second,
    }
}
