//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, request span)
//!     → middleware.rs (per-request metrics)
//!     → cors.rs (cross-origin headers, preflight)
//!     → body.rs (decode client fields)
//!     → handlers.rs (call into the item store)
//!     → error.rs (map failures to status + plain text)
//!     → Send to client
//! ```

pub mod body;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
