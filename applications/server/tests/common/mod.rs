//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chainstream_server::{config::ServerConfig, create_router, state::AppState};
use chainstream_storage::MemoryStore;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Address used as the payment source in tests
pub const PAYER: &str = "0x1234567890123456789012345678901234567890";

/// Router over the sample catalog plus a handle on its store
pub fn seeded_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::seeded().unwrap());
    let state = AppState::new(store.clone(), Arc::new(ServerConfig::default()));
    (create_router(state), store)
}

/// Router over an empty catalog
pub fn empty_app() -> Router {
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(ServerConfig::default()),
    );
    create_router(state)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a raw body with an optional content type
pub async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri).method("POST");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}
