#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hippo_api::config::{LogFormat, ServerConfig, StorageBackend};
use hippo_api::router::build_app_router;
use hippo_api::state::AppState;
use hippo_core::memory::InMemoryMedicationRepository;
use hippo_core::service::{MedicationManager, MedicationService};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 20,
        log_format: LogFormat::Pretty,
        storage: StorageBackend::Memory,
    }
}

/// Build the full application router on top of `service`.
pub fn build_test_app_with(service: Arc<dyn MedicationService>) -> Router {
    let state = AppState {
        medications: service,
        pool: None,
    };
    build_app_router(state, &test_config())
}

/// Build the full application router backed by a fresh in-memory repository.
///
/// Clone the returned router to send several requests against the same data.
pub fn build_test_app() -> Router {
    let repo = Arc::new(InMemoryMedicationRepository::new());
    build_test_app_with(Arc::new(MedicationManager::new(repo)))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Like [`send`] but without a `Content-Type` header.
pub async fn send_untyped(app: &Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: &Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: &Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
