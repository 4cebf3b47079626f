//! Root informational endpoint.

use axum::Json;
use serde_json::{json, Value};

/// GET /
///
/// Static service identification message. Deliberately NOT enveloped; this
/// is what a browser sees when pointed at the server directly.
pub async fn index() -> Json<Value> {
    Json(json!({ "message": "WebXR Object Placement API" }))
}
