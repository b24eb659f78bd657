/*!
 * Shared helpers for simulation tests
 */

use std::time::Duration;
use warehouse_sim::{ActorId, DelayRange, EventKind, SimEvent, SimulationConfig};

/// Fast timings with heavily overlapping robots: one time unit is 1ms
pub fn fast_config(robots: usize) -> SimulationConfig {
    SimulationConfig::default()
        .with_robots(robots)
        .with_travel(DelayRange::new(1.0, 2.0))
        .with_hold(DelayRange::new(5.0, 10.0))
        .with_stagger(1.0)
        .with_time_unit(Duration::from_millis(1))
}

/// No stagger between spawns
pub fn instant_config(robots: usize) -> SimulationConfig {
    SimulationConfig::default()
        .with_robots(robots)
        .with_stagger(0.0)
        .with_time_unit(Duration::from_millis(1))
}

/// Check that every `Accessing` is followed by a `Finished` from the same
/// robot before any other robot accesses the shelf. Returns the robots that
/// finished, in order.
pub fn assert_serialized(events: &[SimEvent]) -> Vec<ActorId> {
    let mut inside: Option<ActorId> = None;
    let mut finished = Vec::new();

    for event in events {
        match event.kind {
            EventKind::Accessing => {
                assert_eq!(
                    inside, None,
                    "robot {} accessed the shelf while robot {:?} held it",
                    event.actor, inside
                );
                inside = Some(event.actor);
            }
            EventKind::Finished => {
                assert_eq!(
                    inside,
                    Some(event.actor),
                    "robot {} finished without holding the shelf",
                    event.actor
                );
                inside = None;
                finished.push(event.actor);
            }
            EventKind::Conflict { .. } => panic!("unexpected conflict: {event}"),
            EventKind::Moving => {}
        }
    }

    assert_eq!(inside, None, "run ended with the shelf occupied");
    finished
}
