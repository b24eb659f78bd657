/*!
 * Simulation Configuration
 *
 * Robot count and timing, in abstract time units scaled by `time_unit`
 */

use crate::core::errors::ConfigError;
use crate::core::types::ActorId;
use crate::delay::{scale_units, DelayRange};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable overriding the robot count
pub const ROBOTS_ENV: &str = "WAREHOUSE_ROBOTS";

/// Environment variable overriding the length of one time unit, in milliseconds
pub const TIME_UNIT_MS_ENV: &str = "WAREHOUSE_TIME_UNIT_MS";

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Robots spawned per run
    pub robots: usize,
    /// Travel time towards the shelf, in time units
    pub travel: DelayRange,
    /// Time spent holding the shelf, in time units
    pub hold: DelayRange,
    /// Pause between robot spawns, in time units
    pub stagger: f64,
    /// Wall-clock length of one time unit
    pub time_unit: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            robots: 5,
            travel: DelayRange::new(0.5, 1.0),
            hold: DelayRange::new(1.0, 2.0),
            stagger: 0.2,
            time_unit: Duration::from_secs(1),
        }
    }
}

impl SimulationConfig {
    /// Defaults with overrides from `WAREHOUSE_ROBOTS` and `WAREHOUSE_TIME_UNIT_MS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_lookup(|var| std::env::var(var).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ROBOTS_ENV) {
            self.robots = parse_positive(ROBOTS_ENV, &value)? as usize;
        }
        if let Some(value) = lookup(TIME_UNIT_MS_ENV) {
            self.time_unit = Duration::from_millis(parse_positive(TIME_UNIT_MS_ENV, &value)?);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn with_robots(mut self, robots: usize) -> Self {
        self.robots = robots;
        self
    }

    pub fn with_travel(mut self, travel: DelayRange) -> Self {
        self.travel = travel;
        self
    }

    pub fn with_hold(mut self, hold: DelayRange) -> Self {
        self.hold = hold;
        self
    }

    pub fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_time_unit(mut self, time_unit: Duration) -> Self {
        self.time_unit = time_unit;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_robots(self.robots)?;
        self.travel.validate("travel")?;
        self.hold.validate("hold")?;
        if !self.stagger.is_finite() || self.stagger < 0.0 {
            return Err(ConfigError::InvalidStagger(self.stagger));
        }
        if self.time_unit.is_zero() {
            return Err(ConfigError::ZeroTimeUnit);
        }
        self.travel.validate_scaled("travel", self.time_unit)?;
        self.hold.validate_scaled("hold", self.time_unit)?;
        if scale_units(self.time_unit, self.stagger).is_none() {
            return Err(ConfigError::DurationOverflow {
                name: "stagger",
                units: self.stagger,
            });
        }
        Ok(())
    }

    /// Wall-clock pause between robot spawns
    #[inline]
    pub fn stagger_duration(&self) -> Duration {
        scale_units(self.time_unit, self.stagger).unwrap_or(Duration::MAX)
    }
}

/// Check a robot count and convert it to the id space
pub(crate) fn validate_robots(robots: usize) -> Result<u32, ConfigError> {
    if robots == 0 {
        return Err(ConfigError::NoRobots);
    }
    match u32::try_from(robots) {
        // Ids run 0..robots, so the last one must stay at or below ActorId::MAX
        Ok(count) if count - 1 <= ActorId::MAX => Ok(count),
        _ => Err(ConfigError::TooManyRobots(robots)),
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidEnv {
            var,
            value: value.to_string(),
        }),
    }
}
