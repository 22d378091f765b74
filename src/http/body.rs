//! Request body decoding.
//!
//! # Responsibilities
//! - Decide whether a body is JSON from its `Content-Type`
//! - Turn the body into a field mapping for the store
//!
//! # Design Decisions
//! - Non-JSON or empty bodies decode to no fields rather than an error
//! - Arrays decode to index-keyed fields (`"0"`, `"1"`, ...)
//! - Any other top-level JSON value is rejected with 400

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::store::Fields;

/// Extractor yielding the client-supplied fields of a request.
#[derive(Debug, Clone, Default)]
pub struct JsonFields(pub Fields);

impl<S> FromRequest<S> for JsonFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state).await?;
        if !is_json {
            return Ok(Self::default());
        }
        decode_fields(&bytes).map(Self)
    }
}

/// `application/json` or any `application/*+json` type, parameters ignored.
pub fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Decode a JSON body into fields.
pub fn decode_fields(bytes: &[u8]) -> Result<Fields, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Fields::new());
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| ApiError::MalformedBody(format!("Malformed JSON body: {e}")))?;

    match value {
        Value::Object(fields) => Ok(fields),
        Value::Array(elements) => Ok(elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| (index.to_string(), element))
            .collect()),
        other => Err(ApiError::MalformedBody(format!(
            "Request body must be a JSON object or array, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
