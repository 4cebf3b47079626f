//! Handlers for the health check endpoints.

use axum::Json;
use serde::Serialize;

use crate::response::Envelope;

/// Ping response payload.
#[derive(Serialize)]
pub struct PingResponse {
    /// Always `true`; the probe succeeding is the signal.
    pub pong: bool,
}

/// GET /api/ping
///
/// Liveness probe. Reads no state, ignores query parameters and headers,
/// and always succeeds.
pub async fn ping() -> Json<Envelope<PingResponse>> {
    Json(Envelope::new(PingResponse { pong: true }))
}
