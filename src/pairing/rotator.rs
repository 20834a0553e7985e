//! Circle-method pairing rotator.
//!
//! # Algorithm
//!
//! 1. Pad the participant list with a bye seat if its length is odd, giving
//!    an even seat count N.
//! 2. Seat 0 is fixed. For each rotation, pair seat i with seat N−1−i for
//!    i in [0, N/2). Pairings against the bye are dropped; the participant
//!    facing it rests.
//! 3. Rotate seats 1..N by one position: the last seat moves to index 1.
//! 4. After N−1 rotations every unordered pair has met exactly once and the
//!    seating is back where it started.
//!
//! The seating is never mutated. Seat positions are computed from the
//! rotation index over a fixed arena of participant handles.
//!
//! # Complexity
//! O(N) per rotation, O(N²) per cycle.
//!
//! # Reference
//! Lucas (1883), "Récréations mathématiques", Vol. 2 (the round-robin
//! "circle" construction)

/// An entry in the rotation arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// A real participant, by index into the caller's participant list.
    Team(usize),
    /// The synthetic bye used to pad an odd participant count.
    Bye,
}

impl Seat {
    /// Participant index, or `None` for the bye.
    #[inline]
    pub fn team(self) -> Option<usize> {
        match self {
            Self::Team(index) => Some(index),
            Self::Bye => None,
        }
    }
}

/// Two participants drawn against each other in one rotation.
///
/// Sides are not decided here; `first` is simply the participant in the
/// lower seat. See [`assign_sides`](super::assign_sides).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing {
    /// Participant index in the lower seat.
    pub first: usize,
    /// Participant index in the mirrored seat.
    pub second: usize,
    /// Pairing slot (the lower seat index, 0..N/2).
    pub slot: usize,
}

impl Pairing {
    /// The pairing as an ordered (low, high) index pair, independent of seats.
    pub fn unordered(&self) -> (usize, usize) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }

    /// Whether the participant plays in this pairing.
    pub fn involves(&self, participant: usize) -> bool {
        self.first == participant || self.second == participant
    }
}

/// The pairings of one rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationSet {
    /// Rotation index within the cycle (0..N−1).
    pub index: usize,
    /// Pairings between real participants, in slot order.
    pub pairings: Vec<Pairing>,
    /// Participant facing the bye in this rotation, if any.
    pub resting: Option<usize>,
}

/// Generates circle-method rotations for a fixed participant count.
///
/// # Example
///
/// ```
/// use u_fixture::pairing::PairingRotator;
///
/// let rotator = PairingRotator::new(4);
/// assert_eq!(rotator.rotations_per_cycle(), 3);
///
/// let first = rotator.rotation(0);
/// assert_eq!(first.pairings.len(), 2);
/// assert_eq!(first.pairings[0].unordered(), (0, 3));
/// ```
#[derive(Debug, Clone)]
pub struct PairingRotator {
    arena: Vec<Seat>,
}

impl PairingRotator {
    /// Creates a rotator for `participant_count` participants.
    ///
    /// Participants are identified by their index in `0..participant_count`.
    pub fn new(participant_count: usize) -> Self {
        let mut arena: Vec<Seat> = (0..participant_count).map(Seat::Team).collect();
        if participant_count % 2 == 1 {
            arena.push(Seat::Bye);
        }
        Self { arena }
    }

    /// Number of real participants.
    pub fn participant_count(&self) -> usize {
        self.arena.iter().filter(|s| s.team().is_some()).count()
    }

    /// Seat count after bye padding (always even).
    #[inline]
    pub fn seat_count(&self) -> usize {
        self.arena.len()
    }

    /// Whether a bye seat was added.
    pub fn has_bye(&self) -> bool {
        self.arena.last() == Some(&Seat::Bye)
    }

    /// Rotations in one full cycle (N−1, or 0 with fewer than two seats).
    #[inline]
    pub fn rotations_per_cycle(&self) -> usize {
        self.seat_count().saturating_sub(1)
    }

    /// Pairings per rotation including the bye pairing (N/2).
    #[inline]
    pub fn slots_per_rotation(&self) -> usize {
        self.seat_count() / 2
    }

    /// Who sits at `position` after `rotation` rotations.
    ///
    /// Position 0 never moves. Positions 1..N shift right by one per
    /// rotation, wrapping the last seat back to position 1.
    pub fn seat_at(&self, rotation: usize, position: usize) -> Seat {
        if position == 0 {
            return self.arena[0];
        }
        let ring = self.rotations_per_cycle();
        let shift = rotation % ring;
        self.arena[1 + (position - 1 + ring - shift) % ring]
    }

    /// The pairings of rotation `index` (taken modulo the cycle length).
    pub fn rotation(&self, index: usize) -> RotationSet {
        let n = self.seat_count();
        let mut pairings = Vec::with_capacity(self.slots_per_rotation());
        let mut resting = None;

        if n >= 2 {
            for slot in 0..n / 2 {
                let a = self.seat_at(index, slot);
                let b = self.seat_at(index, n - 1 - slot);
                match (a, b) {
                    (Seat::Team(first), Seat::Team(second)) => pairings.push(Pairing {
                        first,
                        second,
                        slot,
                    }),
                    (Seat::Team(team), Seat::Bye) | (Seat::Bye, Seat::Team(team)) => {
                        resting = Some(team);
                    }
                    (Seat::Bye, Seat::Bye) => {}
                }
            }
        }

        RotationSet {
            index: index % self.rotations_per_cycle().max(1),
            pairings,
            resting,
        }
    }

    /// All rotations of one cycle, in order.
    pub fn cycle(&self) -> impl Iterator<Item = RotationSet> + '_ {
        (0..self.rotations_per_cycle()).map(move |k| self.rotation(k))
    }

    /// Every pairing of one cycle, flattened in rotation order.
    pub fn cycle_pairings(&self) -> Vec<Pairing> {
        self.cycle().flat_map(|r| r.pairings).collect()
    }
}

/// Runs one full cycle for `participant_count` participants.
pub fn rotate(participant_count: usize) -> Vec<RotationSet> {
    PairingRotator::new(participant_count).cycle().collect()
}

/// Every unordered pair (i, j) with i < j, in lexicographic order.
///
/// This is the all-pairs listing used when a whole mutual round is played
/// in one day, as opposed to the per-rotation circle method.
pub fn all_pairs(participant_count: usize) -> Vec<Pairing> {
    let mut pairs = Vec::with_capacity(participant_count * participant_count.saturating_sub(1) / 2);
    for first in 0..participant_count {
        for second in first + 1..participant_count {
            pairs.push(Pairing {
                first,
                second,
                slot: pairs.len(),
            });
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_two_participants() {
        let rotator = PairingRotator::new(2);
        assert_eq!(rotator.rotations_per_cycle(), 1);
        let sets = rotate(2);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].pairings, vec![Pairing { first: 0, second: 1, slot: 0 }]);
        assert_eq!(sets[0].resting, None);
    }

    #[test]
    fn test_four_participants_rotation_order() {
        // Seating [0,1,2,3] → [0,3,1,2] → [0,2,3,1]
        let rotator = PairingRotator::new(4);
        let r0: Vec<_> = rotator.rotation(0).pairings.iter().map(|p| (p.first, p.second)).collect();
        let r1: Vec<_> = rotator.rotation(1).pairings.iter().map(|p| (p.first, p.second)).collect();
        let r2: Vec<_> = rotator.rotation(2).pairings.iter().map(|p| (p.first, p.second)).collect();
        assert_eq!(r0, vec![(0, 3), (1, 2)]);
        assert_eq!(r1, vec![(0, 2), (3, 1)]);
        assert_eq!(r2, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_rotation_wraps_after_cycle() {
        let rotator = PairingRotator::new(6);
        assert_eq!(rotator.rotation(5).pairings, rotator.rotation(0).pairings);
        assert_eq!(rotator.rotation(7).pairings, rotator.rotation(2).pairings);
    }

    #[test]
    fn test_odd_count_uses_bye() {
        let rotator = PairingRotator::new(3);
        assert!(rotator.has_bye());
        assert_eq!(rotator.seat_count(), 4);
        assert_eq!(rotator.participant_count(), 3);

        let sets: Vec<_> = rotator.cycle().collect();
        assert_eq!(sets.len(), 3);
        for set in &sets {
            assert_eq!(set.pairings.len(), 1);
            assert!(set.resting.is_some());
        }

        // Each participant rests exactly once
        let resting: HashSet<usize> = sets.iter().filter_map(|s| s.resting).collect();
        assert_eq!(resting.len(), 3);
    }

    #[test]
    fn test_even_count_has_no_rest() {
        let rotator = PairingRotator::new(6);
        assert!(!rotator.has_bye());
        assert!(rotator.cycle().all(|s| s.resting.is_none()));
    }

    #[test]
    fn test_slots_preserved_when_bye_dropped() {
        // 5 participants: seats [0,1,2,3,4,Bye]; rotation 0 pairs 0-Bye, 1-4, 2-3
        let set = PairingRotator::new(5).rotation(0);
        assert_eq!(set.resting, Some(0));
        let slots: Vec<usize> = set.pairings.iter().map(|p| p.slot).collect();
        assert_eq!(slots, vec![1, 2]);
    }

    #[test]
    fn test_all_pairs() {
        let pairs = all_pairs(3);
        let as_tuples: Vec<_> = pairs.iter().map(|p| (p.first, p.second)).collect();
        assert_eq!(as_tuples, vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(all_pairs(1).len(), 0);
        assert_eq!(all_pairs(6).len(), 15);
    }

    #[test]
    fn test_degenerate_counts() {
        assert!(rotate(0).is_empty());
        // One participant pads to two seats: one rotation, nobody to play
        let sets = rotate(1);
        assert_eq!(sets.len(), 1);
        assert!(sets[0].pairings.is_empty());
        assert_eq!(sets[0].resting, Some(0));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn test_cycle_covers_every_pair_once(n in 2usize..40) {
                let pairings = PairingRotator::new(n).cycle_pairings();
                prop_assert_eq!(pairings.len(), n * (n - 1) / 2);

                let mut seen = HashSet::new();
                for p in &pairings {
                    prop_assert_ne!(p.first, p.second);
                    prop_assert!(p.first < n && p.second < n);
                    prop_assert!(seen.insert(p.unordered()), "pair {:?} repeated", p.unordered());
                }
            }

            #[test]
            fn test_nobody_plays_twice_in_a_rotation(n in 2usize..40) {
                for set in PairingRotator::new(n).cycle() {
                    let mut busy = HashSet::new();
                    for p in &set.pairings {
                        prop_assert!(busy.insert(p.first));
                        prop_assert!(busy.insert(p.second));
                    }
                    if let Some(r) = set.resting {
                        prop_assert!(!busy.contains(&r));
                    }
                    prop_assert_eq!(set.pairings.len(), n / 2);
                }
            }
        }
    }
}
