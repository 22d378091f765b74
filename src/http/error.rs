//! HTTP-facing errors.
//!
//! Every variant maps to a plain-text response; the 404 body is fixed to
//! `Item not found`.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

/// Body sent when an update targets an unknown id.
pub const NOT_FOUND_BODY: &str = "Item not found";

/// Errors returned from item handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Update target does not exist (404).
    #[error("Item not found")]
    NotFound,

    /// Body declared as JSON could not be decoded into fields (400).
    #[error("{0}")]
    MalformedBody(String),

    /// Body could not be read, e.g. it exceeded the size limit.
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
            ApiError::MalformedBody(msg) => {
                tracing::warn!(error = %msg, "Rejected malformed request body");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Body(rejection) => rejection.into_response(),
        }
    }
}
