//! Fixture generation and KPI evaluation.
//!
//! Provides the generation entry point and schedule quality metrics.
//!
//! # Algorithm
//!
//! `FixtureScheduler` pairs participants with the circle method, balances
//! home and away sides per cycle, and hands the result to the request's
//! date policy, which places matchdays on playable dates. Generation is
//! deterministic: identical requests yield identical schedules.
//!
//! # KPI
//!
//! `ScheduleKpi` computes size, calendar span and home/away fairness
//! metrics.
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in sports"
//! - Rasmussen & Trick (2008), "Round robin scheduling: a survey"

mod generator;
mod kpi;

pub use generator::{FixtureScheduler, ScheduleRequest};
pub use kpi::{ParticipantLoad, ScheduleKpi};
