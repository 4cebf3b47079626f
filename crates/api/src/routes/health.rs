//! Route definitions for the health check endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Health routes mounted under `/api`.
///
/// ```text
/// GET /ping -> ping
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/ping", get(health::ping))
}
