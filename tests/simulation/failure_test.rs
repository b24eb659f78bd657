/*!
 * Failure Tests
 *
 * Invalid configuration and panicking robots surface as errors
 */

use std::sync::Arc;
use std::time::Duration;
use warehouse_sim::{
    ActorId, ActorOutcome, ConfigError, DelayRange, DelaySource, EventKind, EventLog,
    ShelfSnapshot, Simulation, SimulationConfig, SimulationError,
};

use super::common::instant_config;

/// Delay source whose hold step panics for one robot
struct JammedArm {
    jammed: ActorId,
}

impl DelaySource for JammedArm {
    fn travel(&self, _actor: ActorId) -> Duration {
        Duration::ZERO
    }

    fn hold(&self, actor: ActorId) -> Duration {
        if actor == self.jammed {
            panic!("robot arm jammed");
        }
        Duration::from_millis(1)
    }
}

#[test]
fn test_zero_robots_rejected() {
    let simulation = Simulation::new(SimulationConfig::default()).unwrap();
    let err = simulation.run_synchronized(0).unwrap_err();
    assert!(matches!(err, SimulationError::Config(ConfigError::NoRobots)));
}

#[test]
fn test_invalid_config_rejected() {
    let config = SimulationConfig::default().with_travel(DelayRange::new(1.0, 0.5));
    assert!(matches!(
        Simulation::new(config),
        Err(SimulationError::Config(ConfigError::InvalidRange {
            name: "travel",
            ..
        }))
    ));
}

#[test]
fn test_unrepresentable_timing_rejected_up_front() {
    let stagger = SimulationConfig::default().with_stagger(1e20);
    assert!(matches!(
        Simulation::new(stagger),
        Err(SimulationError::Config(ConfigError::DurationOverflow {
            name: "stagger",
            ..
        }))
    ));

    let hold = SimulationConfig::default().with_hold(DelayRange::fixed(1e20));
    assert!(matches!(
        Simulation::new(hold),
        Err(SimulationError::Config(ConfigError::DurationOverflow {
            name: "hold",
            ..
        }))
    ));
}

#[test]
fn test_panicking_robot_is_reported_after_others_finish() {
    let log = Arc::new(EventLog::new());
    let simulation = Simulation::new(instant_config(3))
        .unwrap()
        .with_delays(JammedArm { jammed: ActorId(1) })
        .with_sink(log.clone());

    let err = simulation.run_synchronized(3).unwrap_err();
    match err {
        SimulationError::ActorPanicked { actor, message } => {
            assert_eq!(actor, ActorId(1));
            assert_eq!(message, "robot arm jammed");
        }
        other => panic!("unexpected error: {other}"),
    }

    for robot in [ActorId(0), ActorId(2)] {
        assert!(log
            .for_actor(robot)
            .iter()
            .any(|e| e.kind == EventKind::Finished));
    }
    // The jammed robot's guard freed the shelf on unwind
    assert_eq!(simulation.shelf().snapshot(), ShelfSnapshot::FREE);
}

#[test]
fn test_simulation_reusable_after_failure() {
    let simulation = Simulation::new(instant_config(2))
        .unwrap()
        .with_delays(JammedArm { jammed: ActorId(1) })
        .with_sink(Arc::new(EventLog::new()));
    assert!(simulation.run_synchronized(2).is_err());

    // Robot 1 is not part of a one-robot run
    let report = simulation.run_synchronized(1).unwrap();
    assert_eq!(report.finished, 1);
    assert_eq!(report.outcome(ActorId(0)), Some(ActorOutcome::Finished));
}
