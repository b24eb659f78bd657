/*!
 * Deterministic Scenario Tests
 *
 * Fixed delays make the interleaving predictable
 */

use super::common::{assert_serialized, instant_config};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use warehouse_sim::{
    ActorId, ActorOutcome, EventKind, EventLog, FixedDelays, Protocol, Severity, ShelfSnapshot,
    Simulation, SimulationConfig,
};

#[test]
fn test_synchronized_zero_delays() {
    let log = Arc::new(EventLog::new());
    let simulation = Simulation::new(instant_config(3))
        .unwrap()
        .with_delays(FixedDelays::zero())
        .with_sink(log.clone());

    let report = simulation.run_synchronized(3).unwrap();
    assert_eq!(report.finished, 3);
    assert_eq!(report.conflicts, 0);

    let events = log.events();
    assert!(log.conflicts().is_empty());

    let mut finished = assert_serialized(&events);
    finished.sort();
    assert_eq!(finished, vec![ActorId(0), ActorId(1), ActorId(2)]);
    assert_eq!(simulation.shelf().snapshot(), ShelfSnapshot::FREE);
}

#[test]
fn test_unsynchronized_same_travel_conflicts_with_first_robot() {
    // 20ms stagger, robot 0 holds the shelf for 400ms
    let config = SimulationConfig::default()
        .with_robots(3)
        .with_stagger(0.2)
        .with_time_unit(Duration::from_millis(100));
    let log = Arc::new(EventLog::new());
    let simulation = Simulation::new(config)
        .unwrap()
        .with_delays(FixedDelays::new(Duration::ZERO, Duration::from_millis(400)))
        .with_sink(log.clone());

    let report = simulation.run_unsynchronized(3).unwrap();

    assert_eq!(report.outcome(ActorId(0)), Some(ActorOutcome::Finished));
    for robot in [ActorId(1), ActorId(2)] {
        assert_eq!(
            report.outcome(robot),
            Some(ActorOutcome::Conflict {
                holder: Some(ActorId(0))
            })
        );
    }
    assert_eq!(report.finished, 1);
    assert_eq!(report.conflicts, 2);

    let conflicts = log.conflicts();
    assert_eq!(conflicts.len(), 2);
    for event in &conflicts {
        assert_eq!(event.severity(), Severity::Error);
        assert_eq!(
            event.to_string(),
            format!("[CRASH] Robot {} collided with Robot 0!", event.actor)
        );
    }

    // Conflicted robots never access the shelf
    let accessing: Vec<_> = log
        .events()
        .into_iter()
        .filter(|e| e.kind == EventKind::Accessing)
        .map(|e| e.actor)
        .collect();
    assert_eq!(accessing, vec![ActorId(0)]);
    assert_eq!(simulation.shelf().snapshot(), ShelfSnapshot::FREE);
}

#[test]
fn test_every_robot_moves_first() {
    let log = Arc::new(EventLog::new());
    let simulation = Simulation::new(instant_config(4))
        .unwrap()
        .with_delays(FixedDelays::new(Duration::ZERO, Duration::from_millis(1)))
        .with_sink(log.clone());

    simulation.run(Protocol::Synchronized).unwrap();

    for id in 0..4 {
        let events = log.for_actor(ActorId(id));
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Moving, EventKind::Accessing, EventKind::Finished]
        );
        assert!(events.windows(2).all(|w| w[0].elapsed <= w[1].elapsed));
    }
}

#[test]
fn test_shelf_reset_between_runs() {
    // 5ms stagger lets robot 0 finish before robot 1 arrives
    let simulation = Simulation::new(instant_config(2).with_stagger(5.0))
        .unwrap()
        .with_delays(FixedDelays::zero())
        .with_sink(Arc::new(EventLog::new()));

    // Leave the shelf occupied, as a crashed earlier run might
    assert!(simulation.shelf().try_occupy(ActorId(9)));

    let report = simulation.run_unsynchronized(2).unwrap();
    assert_eq!(report.conflicts, 0);
    assert_eq!(report.finished, 2);
}
