//! League fixture scheduling.
//!
//! Turns a participant list, a date placement policy and a calendar into a
//! complete, dated list of fixtures. Pairings come from the circle method,
//! home and away sides are balanced per cycle, and matchdays are placed on
//! playable dates according to one of three policies.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Participant`, `Fixture`, `Schedule`,
//!   `Policy`, `WeekdaySet`, `PlayCalendar`, `DateCursor`
//! - **`pairing`**: Circle-method `PairingRotator` and home/away balancing
//! - **`assembly`**: The `DatePolicy` trait and the three placement policies
//! - **`scheduler`**: `FixtureScheduler` entry point and `ScheduleKpi`
//! - **`validation`**: Input integrity checks (participant count, IDs, parameters)
//! - **`config`**: Scheduler-wide settings, loadable from TOML
//! - **`api`**: Boundary request/response shapes
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_fixture::{FixtureScheduler, Policy, ScheduleRequest};
//! use u_fixture::models::participants_from_ids;
//!
//! let request = ScheduleRequest::new(
//!     participants_from_ids(["Lions", "Tigers", "Bears"]),
//!     Policy::weekend_double(6),
//!     NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
//! );
//! let schedule = FixtureScheduler::new().generate(&request).unwrap();
//! assert_eq!(schedule.fixture_count(), 6);
//! assert_eq!(schedule.matchday_count(), 2);
//! ```
//!
//! # Observability
//!
//! Generation logs through `tracing`. The crate installs no subscriber.
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in sports"
//! - Rasmussen & Trick (2008), "Round robin scheduling: a survey"
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

pub mod api;
pub mod assembly;
pub mod config;
pub mod error;
pub mod models;
pub mod pairing;
pub mod scheduler;
pub mod validation;

pub use config::SchedulerConfig;
pub use error::ScheduleError;
pub use models::{Fixture, FixtureStatus, Participant, Policy, PolicyKind, Schedule};
pub use scheduler::{FixtureScheduler, ScheduleKpi, ScheduleRequest};
