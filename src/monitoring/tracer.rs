/*!
 * Tracing Setup
 * Structured console output using the tracing crate
 *
 * Features:
 * - Human-readable, colored output by default
 * - JSON-formatted logs for structured parsing
 * - One span per simulation run
 */

use crate::protocol::Protocol;
use tracing::{info, span, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Environment variable switching the output to JSON
pub const TRACE_JSON_ENV: &str = "WAREHOUSE_TRACE_JSON";

/// Whether JSON output was requested through the environment
pub fn json_requested() -> bool {
    std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
}

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - WAREHOUSE_TRACE_JSON: Enable JSON output (default: false)
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_names(true)
                    .with_ansi(true)
                    .compact(),
            )
            .try_init()
    };

    if result.is_ok() {
        info!("Structured tracing initialized");
    }
}

/// Span covering one simulation run
pub fn span_run(protocol: Protocol, robots: usize) -> Span {
    span!(
        Level::INFO,
        "simulation",
        protocol = ?protocol,
        robots = robots,
    )
}
