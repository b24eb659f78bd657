/*!
 * Warehouse Simulation Library
 *
 * Robots contending for a single warehouse shelf, run either without
 * synchronization (races surface as conflicts) or with an exclusive-access
 * guard (robots take turns).
 */

pub mod core;
pub mod delay;
pub mod monitoring;
pub mod protocol;
pub mod shelf;
pub mod simulation;

// Re-exports
pub use crate::core::{ActorId, ConfigError, SimulationError, SimulationResult};
pub use delay::{DelayRange, DelaySource, FixedDelays, RandomDelays};
pub use monitoring::{init_tracing, EventKind, EventLog, EventSink, Severity, SimEvent, TracingSink};
pub use protocol::{ActorContext, ActorOutcome, Protocol};
pub use shelf::{Shelf, ShelfGuard, ShelfSnapshot};
pub use simulation::{RunReport, Simulation, SimulationConfig};
