pub mod health;
pub mod medication;

use axum::Router;

use crate::state::AppState;

/// Every `(method, path)` pair the API serves, logged at startup.
///
/// ```text
/// GET    /health                 service and database health
///
/// GET    /medication             list
/// POST   /medication             create
/// GET    /medication/            list
/// POST   /medication/            create
/// GET    /medication/{id}        get
/// PUT    /medication/{id}        update
/// DELETE /medication/{id}        delete
/// ```
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("GET", "/medication"),
    ("POST", "/medication"),
    ("GET", "/medication/"),
    ("POST", "/medication/"),
    ("GET", "/medication/{id}"),
    ("PUT", "/medication/{id}"),
    ("DELETE", "/medication/{id}"),
];

/// Build the resource route tree (everything except `/health`).
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(medication::router())
}
