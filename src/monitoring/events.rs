/*!
 * Event System
 * Strongly-typed events emitted by robots during a run
 */

use crate::core::types::ActorId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Event severity for filtering and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    Info = 2,
    Error = 4,
}

/// What a robot did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    /// Started travelling towards the shelf
    Moving,
    /// Occupied the shelf and started picking
    Accessing,
    /// Released the shelf
    Finished,
    /// Found the shelf occupied. `holder` is read after the failed check and
    /// may be stale.
    Conflict { holder: Option<ActorId> },
}

impl EventKind {
    #[inline]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Conflict { .. } => Severity::Error,
            _ => Severity::Info,
        }
    }

    #[inline]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

/// One line of simulation output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimEvent {
    pub actor: ActorId,
    pub kind: EventKind,
    /// Time since the run started
    pub elapsed: Duration,
}

impl SimEvent {
    #[inline]
    pub fn new(actor: ActorId, kind: EventKind, elapsed: Duration) -> Self {
        Self {
            actor,
            kind,
            elapsed,
        }
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actor = self.actor;
        match self.kind {
            EventKind::Moving => write!(f, "[Robot {actor}] is moving towards the shelf..."),
            EventKind::Accessing => write!(f, "[Robot {actor}] is accessing the shelf..."),
            EventKind::Finished => write!(f, "[Robot {actor}] has finished picking an item."),
            EventKind::Conflict {
                holder: Some(holder),
            } => write!(f, "[CRASH] Robot {actor} collided with Robot {holder}!"),
            EventKind::Conflict { holder: None } => {
                write!(f, "[CRASH] Robot {actor} collided with an unknown robot!")
            }
        }
    }
}
