/*!
 * Access Protocols
 *
 * What each robot does against the shared shelf:
 *
 * - **Unsynchronized**: check availability, then occupy. Two robots can pass
 *   the check together, which surfaces as a conflict.
 * - **Synchronized**: travel concurrently, then occupy, hold and release inside
 *   the shelf's exclusive-access guard.
 *
 * Neither variant retries. A robot makes exactly one attempt.
 */

mod synchronized;
mod unsynchronized;

pub use synchronized::access_with_lock;
pub use unsynchronized::access_without_lock;

use crate::core::types::ActorId;
use crate::delay::DelaySource;
use crate::monitoring::{EventKind, EventSink, SimEvent};
use crate::shelf::Shelf;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Access protocol variant run by every robot of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    /// Check-then-act with no mutual exclusion (races expected)
    Unsynchronized,
    /// Critical section serialized by the shelf's exclusive-access guard
    Synchronized,
}

impl Protocol {
    /// Run one robot to completion
    pub fn execute(self, ctx: &ActorContext, actor: ActorId) -> ActorOutcome {
        match self {
            Self::Unsynchronized => access_without_lock(ctx, actor),
            Self::Synchronized => access_with_lock(ctx, actor),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unsynchronized => "WITHOUT synchronization",
            Self::Synchronized => "WITH synchronization",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How one robot's attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActorOutcome {
    /// Picked an item and released the shelf
    Finished,
    /// Found the shelf occupied and gave up
    Conflict { holder: Option<ActorId> },
}

impl ActorOutcome {
    #[inline]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

/// Everything a robot thread needs, shared by all robots of a run
#[derive(Clone)]
pub struct ActorContext {
    pub shelf: Arc<Shelf>,
    pub delays: Arc<dyn DelaySource>,
    pub sink: Arc<dyn EventSink>,
    /// Start of the run, for event timestamps
    pub started: Instant,
}

impl ActorContext {
    pub fn new(shelf: Arc<Shelf>, delays: Arc<dyn DelaySource>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            shelf,
            delays,
            sink,
            started: Instant::now(),
        }
    }

    #[inline]
    pub(crate) fn emit(&self, actor: ActorId, kind: EventKind) {
        self.sink
            .record(&SimEvent::new(actor, kind, self.started.elapsed()));
    }
}

impl fmt::Debug for ActorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorContext")
            .field("shelf", &self.shelf)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

/// Block the robot for a simulated delay
#[inline]
pub(crate) fn pause(duration: Duration) {
    if !duration.is_zero() {
        std::thread::sleep(duration);
    }
}
