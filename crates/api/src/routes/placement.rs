//! Route definitions for object placement.

use axum::routing::post;
use axum::Router;

use crate::handlers::placement;
use crate::state::AppState;

/// Placement routes mounted under `/api`.
///
/// ```text
/// POST /save -> save_placement
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/save", post(placement::save_placement))
}
