//! Pairing generation and side assignment.
//!
//! Produces who-plays-whom for each rotation of a round-robin cycle and
//! decides which side of each pairing is at home. Dates are not involved
//! here; see [`assembly`](crate::assembly) for placement on the calendar.
//!
//! # Usage
//!
//! ```
//! use u_fixture::pairing::{sides_for, PairingRotator};
//!
//! let rotator = PairingRotator::new(5);
//! for set in rotator.cycle() {
//!     for pairing in &set.pairings {
//!         let sides = sides_for(pairing, 0);
//!         assert_ne!(sides.home, sides.away);
//!     }
//! }
//! ```
//!
//! # References
//!
//! - Lucas (1883), "Récréations mathématiques", Vol. 2
//! - de Werra (1981), "Scheduling in sports"

mod balancer;
mod rotator;

pub use balancer::{assign_sides, first_at_home, sides_for, Sides};
pub use rotator::{all_pairs, rotate, Pairing, PairingRotator, RotationSet, Seat};
