/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use super::types::ActorId;
use miette::Diagnostic;
use thiserror::Error;

/// Common result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Configuration errors, raised before any robot is spawned
#[derive(Error, Debug, Clone, PartialEq, Diagnostic)]
pub enum ConfigError {
    #[error("Robot count must be at least 1")]
    #[diagnostic(
        code(config::no_robots),
        help("Run the simulation with one or more robots.")
    )]
    NoRobots,

    #[error("Robot count {0} exceeds the id space")]
    #[diagnostic(
        code(config::too_many_robots),
        help("Robot ids are 32-bit; choose a smaller robot count.")
    )]
    TooManyRobots(usize),

    #[error("Invalid {name} range: {min}..={max}")]
    #[diagnostic(
        code(config::invalid_range),
        help("Bounds must be finite, non-negative and min <= max.")
    )]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Invalid stagger: {0}")]
    #[diagnostic(
        code(config::invalid_stagger),
        help("Stagger must be a finite, non-negative number of time units.")
    )]
    InvalidStagger(f64),

    #[error("{name} of {units} time units does not fit in a duration")]
    #[diagnostic(
        code(config::duration_overflow),
        help("Lower the value or the time unit.")
    )]
    DurationOverflow { name: &'static str, units: f64 },

    #[error("Time unit must be greater than zero")]
    #[diagnostic(code(config::zero_time_unit))]
    ZeroTimeUnit,

    #[error("Invalid value for {var}: {value:?}")]
    #[diagnostic(
        code(config::invalid_env),
        help("Expected a positive integer.")
    )]
    InvalidEnv { var: &'static str, value: String },
}

/// Errors surfaced by a simulation run
///
/// Conflicts between robots are reported through events and the run report,
/// never through this type.
#[derive(Error, Debug, Diagnostic)]
pub enum SimulationError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to spawn robot {actor}")]
    #[diagnostic(
        code(simulation::spawn_failed),
        help("The OS refused to create a thread. Check process thread limits.")
    )]
    Spawn {
        actor: ActorId,
        #[source]
        source: std::io::Error,
    },

    #[error("Robot {actor} panicked: {message}")]
    #[diagnostic(code(simulation::actor_panicked))]
    ActorPanicked { actor: ActorId, message: String },
}

impl SimulationError {
    /// Build an `ActorPanicked` error from a thread's panic payload
    pub(crate) fn from_panic(actor: ActorId, payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        Self::ActorPanicked { actor, message }
    }
}
