//! Router test helpers: in-memory store, fixed todo payload

use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use crate::db::{create_memory_pool, ensure_schema};
use crate::http::server::{create_router, ServerConfig};
use crate::state::AppState;
use crate::templates::Templates;
use crate::todos::{FixedTodoSource, TodoSource};

pub(crate) async fn test_app() -> Router {
    test_app_with_todos(FixedTodoSource(json!({
        "userId": 1,
        "id": 1,
        "title": "delectus aut autem",
        "completed": false
    })))
    .await
}

pub(crate) async fn test_app_with_todos(todos: impl TodoSource + 'static) -> Router {
    let pool = create_memory_pool().await.unwrap();
    ensure_schema(&pool).await.unwrap();

    let state = AppState::new(pool, Templates::builtin().unwrap(), Arc::new(todos));
    create_router(state, &ServerConfig::default())
}

pub(crate) async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

pub(crate) async fn get(app: &Router, uri: &str) -> (StatusCode, Bytes) {
    send(app, "GET", uri).await
}

pub(crate) async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send_request(app, request).await
}

pub(crate) async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: &str,
) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send_request(app, request).await
}
