//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the store produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID is attached to every request span
//! - Metric calls are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
