//! Route definitions for the `/medication` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::medication;
use crate::state::AppState;

/// Routes for `/medication`.
///
/// The collection is reachable with and without the trailing slash.
///
/// ```text
/// GET    /medication/          -> list
/// POST   /medication/          -> create
/// GET    /medication/{id}      -> get_by_id
/// PUT    /medication/{id}      -> update
/// DELETE /medication/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/medication",
            get(medication::list).post(medication::create),
        )
        .route(
            "/medication/",
            get(medication::list).post(medication::create),
        )
        .route(
            "/medication/{id}",
            get(medication::get_by_id)
                .put(medication::update)
                .delete(medication::delete),
        )
}
