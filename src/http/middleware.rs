//! Request metrics middleware.
//!
//! Sits outside the body limit and timeout layers so that rejections made
//! before a handler runs (400, 413, 408) are counted alongside handler
//! responses.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::observability::metrics;

/// Operation label for a request, from its method and matched route.
pub fn operation_name(method: &Method, route: Option<&str>) -> &'static str {
    match (method, route) {
        (&Method::GET, Some("/items")) => "list",
        (&Method::POST, Some("/items")) => "create",
        (&Method::PUT, Some("/items/{id}")) => "update",
        (&Method::DELETE, Some("/items/{id}")) => "delete",
        _ => "other",
    }
}

pub async fn record_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let operation = operation_name(
        req.method(),
        req.extensions().get::<MatchedPath>().map(MatchedPath::as_str),
    );

    let response = next.run(req).await;
    metrics::record_request(operation, response.status().as_u16(), start);
    response
}
