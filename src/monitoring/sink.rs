/*!
 * Event Sinks
 * Destinations for simulation events
 */

use super::events::{Severity, SimEvent};
use crate::core::types::ActorId;
use parking_lot::Mutex;
use tracing::{error, info};

/// Receives every event of a run, from all robot threads
pub trait EventSink: Send + Sync {
    fn record(&self, event: &SimEvent);
}

/// Writes events through `tracing`
///
/// Lifecycle events log at INFO, conflicts at ERROR so they stand out on the
/// console.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &SimEvent) {
        match event.severity() {
            Severity::Error => error!(
                robot = %event.actor,
                elapsed_ms = event.elapsed.as_millis() as u64,
                "{}",
                event
            ),
            Severity::Info => info!(
                robot = %event.actor,
                elapsed_ms = event.elapsed.as_millis() as u64,
                "{}",
                event
            ),
        }
    }
}

/// In-memory event log, in arrival order
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<SimEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<SimEvent> {
        self.events.lock().clone()
    }

    /// Drain the log
    pub fn take(&self) -> Vec<SimEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn conflicts(&self) -> Vec<SimEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.kind.is_conflict())
            .copied()
            .collect()
    }

    /// Events recorded by one robot
    pub fn for_actor(&self, actor: ActorId) -> Vec<SimEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.actor == actor)
            .copied()
            .collect()
    }
}

impl EventSink for EventLog {
    fn record(&self, event: &SimEvent) {
        self.events.lock().push(*event);
    }
}
