//! Helpers shared by route tests.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use laba_core::store::MemoryRecordStore;
use laba_shared::config::ReportConfig;
use tower::ServiceExt;

use crate::{AppState, create_router};

/// Router over `store` with default report settings.
pub fn app(store: &Arc<MemoryRecordStore>) -> Router {
    create_router(AppState::new(store.clone(), ReportConfig::default()))
}

/// Sends one request and returns the status and raw body.
pub async fn send_raw(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Sends one request and parses the JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send_raw(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

/// GET request.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// POST request with a JSON body.
pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
