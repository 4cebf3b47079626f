pub mod health;
pub mod placement;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ping    liveness check
/// /save    validate and echo a placement
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(placement::router())
}

/// Root-level informational route (intended for `/`, NOT under `/api`).
pub fn root_router() -> Router<AppState> {
    Router::new().route("/", get(handlers::root::index))
}
