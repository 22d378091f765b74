//! Item endpoint handlers.
//!
//! | Method | Path         | Success            |
//! |--------|--------------|--------------------|
//! | GET    | /items       | 200, array         |
//! | POST   | /items       | 200, created item  |
//! | PUT    | /items/{id}  | 200, updated item  |
//! | DELETE | /items/{id}  | 204, empty         |

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::http::body::JsonFields;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::{Item, ItemKey};

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.list())
}

pub async fn create_item(
    State(state): State<AppState>,
    JsonFields(fields): JsonFields,
) -> Json<Item> {
    Json(state.store.create(fields))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonFields(fields): JsonFields,
) -> Result<Json<Item>, ApiError> {
    let key = ItemKey::parse(&id);
    let item = state.store.update(&key, fields).inspect_err(|_| {
        tracing::debug!(id = %key, "Update target not found");
    })?;
    Ok(Json(item))
}

pub async fn delete_item(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.store.delete(&ItemKey::parse(&id));
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, Response},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::ServiceConfig;
    use crate::http::server::HttpServer;

    fn create_test_app() -> Router {
        HttpServer::new(ServiceConfig::default()).router()
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_bytes(response: Response<Body>) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response<Body>) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_get_empty_store_returns_empty_array() {
        let sut = create_test_app();

        let response = sut.oneshot(empty_request(Method::GET, "/items")).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_post_returns_created_item_with_id_first() {
        let sut = create_test_app();

        let response = sut
            .oneshot(json_request(Method::POST, "/items", json!({"name": "a", "qty": 3})))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let bytes = body_bytes(response).await;
        assert_eq!(bytes, br#"{"id":1,"name":"a","qty":3}"#.to_vec());
    }

    #[tokio::test]
    async fn test_post_without_json_content_type_creates_bare_item() {
        let sut = create_test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/items")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("name=a"))
            .unwrap();
        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(body_json(response).await, json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_post_malformed_json_returns_400() {
        let sut = create_test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\":"))
            .unwrap();
        let response = sut.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), 400);

        // Nothing was stored and no id was consumed.
        let response = sut
            .oneshot(json_request(Method::POST, "/items", json!({})))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_put_unknown_id_returns_404_plain_text() {
        let sut = create_test_app();

        let response = sut
            .oneshot(json_request(Method::PUT, "/items/9999", json!({"name": "x"})))
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body_bytes(response).await, b"Item not found".to_vec());
    }

    #[tokio::test]
    async fn test_put_merges_fields() {
        let sut = create_test_app();
        sut.clone()
            .oneshot(json_request(Method::POST, "/items", json!({"name": "a", "qty": 1})))
            .await
            .unwrap();

        let response = sut
            .oneshot(json_request(Method::PUT, "/items/1", json!({"qty": 2})))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(
            body_json(response).await,
            json!({"id": 1, "name": "a", "qty": 2})
        );
    }

    #[tokio::test]
    async fn test_delete_returns_204_with_empty_body() {
        let sut = create_test_app();
        sut.clone()
            .oneshot(json_request(Method::POST, "/items", json!({"name": "a"})))
            .await
            .unwrap();

        let response = sut
            .clone()
            .oneshot(empty_request(Method::DELETE, "/items/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), 204);
        assert!(body_bytes(response).await.is_empty());

        // Deleting again is still a success.
        let response = sut
            .clone()
            .oneshot(empty_request(Method::DELETE, "/items/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), 204);

        let response = sut.oneshot(empty_request(Method::GET, "/items")).await.unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_response_carries_request_id() {
        let sut = create_test_app();

        let request = Request::builder()
            .uri("/items")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = sut.clone().oneshot(request).await.unwrap();
        assert_eq!(response.headers()["x-request-id"], "abc-123");

        let response = sut.oneshot(empty_request(Method::GET, "/items")).await.unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let sut = create_test_app();

        let request = Request::builder()
            .uri("/items")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = sut.clone().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let preflight = Request::builder()
            .method(Method::OPTIONS)
            .uri("/items/1")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = sut.oneshot(preflight).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .to_string();
        assert!(methods.contains("PUT"));
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "content-type"
        );
    }

    #[tokio::test]
    async fn test_cors_can_be_disabled() {
        let mut config = ServiceConfig::default();
        config.cors.enabled = false;
        let sut = HttpServer::new(config).router();

        let request = Request::builder()
            .uri("/items")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = sut.oneshot(request).await.unwrap();
        assert!(!response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_oversized_body_returns_413() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_size = 16;
        let sut = HttpServer::new(config).router();

        let response = sut
            .oneshot(json_request(
                Method::POST,
                "/items",
                json!({"name": "this body is longer than sixteen bytes"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), 413);
    }

    #[tokio::test]
    async fn test_body_limit_above_axum_default_is_honoured() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_size = 8 * 1024 * 1024;
        let sut = HttpServer::new(config).router();

        // 3 MiB: over axum's built-in 2 MiB cap, under the configured limit.
        let payload = "x".repeat(3 * 1024 * 1024);
        let response = sut
            .oneshot(json_request(Method::POST, "/items", json!({"blob": payload})))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let item = body_json(response).await;
        assert_eq!(item["id"], json!(1));
        assert_eq!(item["blob"].as_str().map(str::len), Some(3 * 1024 * 1024));
    }
}
