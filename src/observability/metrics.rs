//! Metrics collection and exposition.
//!
//! # Metrics
//! - `items_requests_total` (counter): requests by operation, status
//! - `items_request_duration_seconds` (histogram): handler latency by operation
//! - `items_stored` (gauge): items currently held
//!
//! # Design Decisions
//! - Uses the `metrics` facade; nothing is recorded until `init_metrics` runs
//! - Exporter is opt-in via `observability.metrics_enabled`

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(operation: &'static str, status: u16, start: Instant) {
    counter!(
        "items_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("items_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}

/// Record the number of items currently held.
pub fn record_stored(count: usize) {
    gauge!("items_stored").set(count as f64);
}
