//! Scheduler configuration.
//!
//! Settings that apply to every generation run rather than to one request:
//! kick-off time, the date-search cap and the size bounds. Can be built
//! in code or loaded from TOML:
//!
//! ```toml
//! kickoff_time = "19:30:00"
//! lookahead_days = 14
//! max_workload = 5000
//! max_fixtures = 20000
//! ```

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::MIN_LOOKAHEAD_DAYS;

/// Default kick-off: 18:00.
pub const DEFAULT_KICKOFF_HOUR: u32 = 18;

/// Default bound on `rounds × participants`.
pub const DEFAULT_MAX_WORKLOAD: usize = 10_000;

/// Default bound on the number of fixtures one request may produce.
pub const DEFAULT_MAX_FIXTURES: u64 = 100_000;

/// Scheduler-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Time of day stamped on every fixture.
    pub kickoff_time: NaiveTime,
    /// Maximum dates examined when looking for a playable day.
    pub lookahead_days: u32,
    /// Upper bound on `rounds × participants` per request.
    pub max_workload: usize,
    /// Upper bound on the fixtures a request would generate.
    pub max_fixtures: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            kickoff_time: NaiveTime::from_hms_opt(DEFAULT_KICKOFF_HOUR, 0, 0)
                .unwrap_or_default(),
            lookahead_days: MIN_LOOKAHEAD_DAYS,
            max_workload: DEFAULT_MAX_WORKLOAD,
            max_fixtures: DEFAULT_MAX_FIXTURES,
        }
    }
}

impl SchedulerConfig {
    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ScheduleError> {
        let config: Self =
            toml::from_str(source).map_err(|e| ScheduleError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the kick-off time.
    pub fn with_kickoff_time(mut self, kickoff_time: NaiveTime) -> Self {
        self.kickoff_time = kickoff_time;
        self
    }

    /// Sets the date-search cap.
    pub fn with_lookahead_days(mut self, lookahead_days: u32) -> Self {
        self.lookahead_days = lookahead_days;
        self
    }

    /// Sets the workload bound.
    pub fn with_max_workload(mut self, max_workload: usize) -> Self {
        self.max_workload = max_workload;
        self
    }

    /// Sets the fixture-count bound.
    pub fn with_max_fixtures(mut self, max_fixtures: u64) -> Self {
        self.max_fixtures = max_fixtures;
        self
    }

    /// Checks the settings are usable.
    ///
    /// A lookahead under seven days could miss the only playable weekday
    /// and report a deadlock that does not exist.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.lookahead_days < MIN_LOOKAHEAD_DAYS {
            return Err(ScheduleError::Config(format!(
                "lookahead_days must be at least {MIN_LOOKAHEAD_DAYS}, got {}",
                self.lookahead_days
            )));
        }
        if self.max_workload < 2 {
            return Err(ScheduleError::Config(format!(
                "max_workload must be at least 2, got {}",
                self.max_workload
            )));
        }
        if self.max_fixtures == 0 {
            return Err(ScheduleError::Config(
                "max_fixtures must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
