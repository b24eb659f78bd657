/*!
 * Monitoring
 * Simulation events, the sinks that receive them, and tracing setup
 */

mod events;
mod sink;
mod tracer;

pub use events::{EventKind, Severity, SimEvent};
pub use sink::{EventLog, EventSink, TracingSink};
pub use tracer::{init_tracing, json_requested, span_run, TRACE_JSON_ENV};
