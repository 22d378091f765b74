//! Cross-origin policy.
//!
//! Any origin may call the API. Preflight requests advertise the standard
//! method set and echo back whatever headers the browser asked for.

use axum::http::Method;
use tower_http::cors::{AllowHeaders, Any, CorsLayer};

/// Methods advertised on preflight responses.
pub const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::HEAD,
    Method::PUT,
    Method::PATCH,
    Method::POST,
    Method::DELETE,
];

/// Build the permissive CORS layer.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(AllowHeaders::mirror_request())
}
