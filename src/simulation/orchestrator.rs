/*!
 * Simulation Orchestrator
 * Spawns one thread per robot, joins them all and reports the outcome
 */

use super::config::{validate_robots, SimulationConfig};
use super::report::RunReport;
use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::types::ActorId;
use crate::delay::{DelaySource, RandomDelays};
use crate::monitoring::{span_run, EventSink, TracingSink};
use crate::protocol::{pause, ActorContext, ActorOutcome, Protocol};
use crate::shelf::Shelf;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{error, info};

/// Prepares the thread a robot runs on
type ThreadBuilderFn = fn(ActorId) -> io::Result<thread::Builder>;

/// Named thread per robot, e.g. `robot-3`
fn robot_thread(actor: ActorId) -> io::Result<thread::Builder> {
    Ok(thread::Builder::new().name(format!("robot-{actor}")))
}

/// Runs robots against one shared shelf
///
/// Runs on the same `Simulation` are serialized; the shelf is reset at the
/// start of each one and reused afterwards.
pub struct Simulation {
    config: SimulationConfig,
    shelf: Arc<Shelf>,
    delays: Arc<dyn DelaySource>,
    sink: Arc<dyn EventSink>,
    run_lock: Mutex<()>,
    thread_builder: ThreadBuilderFn,
}

impl Simulation {
    /// Random delays from `config`, events logged through tracing
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;
        let delays = RandomDelays::new(config.travel, config.hold, config.time_unit);
        Ok(Self {
            config,
            shelf: Arc::new(Shelf::new()),
            delays: Arc::new(delays),
            sink: Arc::new(TracingSink),
            run_lock: Mutex::new(()),
            thread_builder: robot_thread,
        })
    }

    /// Replace the delay source, e.g. with fixed durations
    pub fn with_delays<D: DelaySource + 'static>(mut self, delays: D) -> Self {
        self.delays = Arc::new(delays);
        self
    }

    /// Replace the event sink
    pub fn with_sink<S: EventSink + 'static>(mut self, sink: Arc<S>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn shelf(&self) -> &Arc<Shelf> {
        &self.shelf
    }

    /// Run `protocol` with the configured robot count
    pub fn run(&self, protocol: Protocol) -> SimulationResult<RunReport> {
        self.run_simulation(protocol, self.config.robots)
    }

    pub fn run_unsynchronized(&self, robots: usize) -> SimulationResult<RunReport> {
        self.run_simulation(Protocol::Unsynchronized, robots)
    }

    pub fn run_synchronized(&self, robots: usize) -> SimulationResult<RunReport> {
        self.run_simulation(Protocol::Synchronized, robots)
    }

    /// Spawn `robots` robots running `protocol` and wait for all of them
    ///
    /// Every spawned robot is joined before an error is returned, so a failed
    /// spawn or a panicking robot never leaves threads behind.
    pub fn run_simulation(&self, protocol: Protocol, robots: usize) -> SimulationResult<RunReport> {
        let count = validate_robots(robots)?;
        let _run = self.run_lock.lock();

        let span = span_run(protocol, robots);
        let _entered = span.enter();
        info!("Running {protocol}");

        self.shelf.reset();
        let ctx = ActorContext::new(self.shelf.clone(), self.delays.clone(), self.sink.clone());
        let stagger = self.config.stagger_duration();

        let mut handles: Vec<(ActorId, JoinHandle<ActorOutcome>)> = Vec::with_capacity(robots);
        let mut spawn_error = None;

        for id in 0..count {
            let actor = ActorId(id);
            match self.spawn_robot(protocol, &ctx, actor, &span) {
                Ok(handle) => handles.push((actor, handle)),
                Err(source) => {
                    error!(robot = %actor, error = %source, "failed to spawn robot");
                    spawn_error = Some(SimulationError::Spawn { actor, source });
                    break;
                }
            }
            if id + 1 < count {
                pause(stagger);
            }
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        let mut panicked = None;
        for (actor, handle) in handles {
            match handle.join() {
                Ok(outcome) => outcomes.push((actor, outcome)),
                Err(payload) => {
                    let err = SimulationError::from_panic(actor, payload);
                    error!(robot = %actor, error = %err, "robot failed");
                    panicked.get_or_insert(err);
                }
            }
        }

        if let Some(err) = spawn_error.or(panicked) {
            return Err(err);
        }

        let report = RunReport::new(protocol, outcomes, ctx.started.elapsed());
        info!(
            finished = report.finished,
            conflicts = report.conflicts,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "simulation complete"
        );
        Ok(report)
    }

    fn spawn_robot(
        &self,
        protocol: Protocol,
        ctx: &ActorContext,
        actor: ActorId,
        span: &tracing::Span,
    ) -> io::Result<JoinHandle<ActorOutcome>> {
        let ctx = ctx.clone();
        let span = span.clone();
        (self.thread_builder)(actor)?.spawn(move || {
            let _entered = span.enter();
            protocol.execute(&ctx, actor)
        })
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("shelf", &self.shelf)
            .finish_non_exhaustive()
    }
}
