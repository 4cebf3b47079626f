//! Handlers for object placement.
//!
//! `/api/save` validates and echoes a placement; nothing is persisted. The
//! endpoint name is historical and preserved for the demo frontend.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;
use xrplace_core::PlacementPayload;

use crate::error::{AppError, AppResult};
use crate::response::Envelope;

/// Confirmation message returned with every accepted placement.
const PLACEMENT_RECEIVED: &str = "Placement received";

/// POST /api/save
///
/// Validate a `{ position, rotation }` payload and echo it back inside the
/// success envelope. Validation runs over the untyped body so that every
/// failing field is reported at once, not just the first.
pub async fn save_placement(
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Envelope<PlacementPayload>>> {
    let Json(body) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let payload = PlacementPayload::parse(&body)?;

    tracing::debug!(
        position = ?payload.position,
        rotation = ?payload.rotation,
        "Placement validated and echoed",
    );

    Ok(Json(Envelope::with_message(payload, PLACEMENT_RECEIVED)))
}
