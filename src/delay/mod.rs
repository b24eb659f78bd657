/*!
 * Delay Sources
 *
 * Travel and hold durations for robots. Production runs sample uniformly from
 * configured ranges; tests substitute fixed durations so interleavings become
 * deterministic without touching the protocol code.
 */

use crate::core::errors::ConfigError;
use crate::core::types::ActorId;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Inclusive range of time units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min: f64,
    pub max: f64,
}

impl DelayRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range that always yields `units`
    pub const fn fixed(units: f64) -> Self {
        Self {
            min: units,
            max: units,
        }
    }

    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let valid = self.min.is_finite()
            && self.max.is_finite()
            && self.min >= 0.0
            && self.min <= self.max;
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Check that the upper bound still fits in a `Duration` once scaled
    pub fn validate_scaled(
        &self,
        name: &'static str,
        time_unit: Duration,
    ) -> Result<(), ConfigError> {
        match scale_units(time_unit, self.max) {
            Some(_) => Ok(()),
            None => Err(ConfigError::DurationOverflow {
                name,
                units: self.max,
            }),
        }
    }

    /// Draw a value in time units
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.min >= self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

/// Wall-clock length of `units` time units, `None` if it does not fit in a `Duration`
pub fn scale_units(time_unit: Duration, units: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(time_unit.as_secs_f64() * units).ok()
}

/// Capability that decides how long a robot travels and holds the shelf
///
/// Implementations are shared by every robot thread of a run.
pub trait DelaySource: Send + Sync {
    /// Time spent moving towards the shelf
    fn travel(&self, actor: ActorId) -> Duration;

    /// Time spent holding the shelf while picking an item
    fn hold(&self, actor: ActorId) -> Duration;
}

/// Uniformly random delays, using the calling thread's RNG
#[derive(Debug, Clone)]
pub struct RandomDelays {
    travel: DelayRange,
    hold: DelayRange,
    time_unit: Duration,
}

impl RandomDelays {
    pub fn new(travel: DelayRange, hold: DelayRange, time_unit: Duration) -> Self {
        Self {
            travel,
            hold,
            time_unit,
        }
    }

    fn draw(&self, range: &DelayRange) -> Duration {
        let units = range.sample(&mut rand::thread_rng());
        scale_units(self.time_unit, units).unwrap_or(Duration::MAX)
    }
}

impl DelaySource for RandomDelays {
    fn travel(&self, _actor: ActorId) -> Duration {
        self.draw(&self.travel)
    }

    fn hold(&self, _actor: ActorId) -> Duration {
        self.draw(&self.hold)
    }
}

/// Same travel and hold duration for every robot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelays {
    pub travel: Duration,
    pub hold: Duration,
}

impl FixedDelays {
    pub const fn new(travel: Duration, hold: Duration) -> Self {
        Self { travel, hold }
    }

    /// No waiting at all
    pub const fn zero() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl DelaySource for FixedDelays {
    fn travel(&self, _actor: ActorId) -> Duration {
        self.travel
    }

    fn hold(&self, _actor: ActorId) -> Duration {
        self.hold
    }
}
