//! Placement payload types and their validation.
//!
//! Validation is a pure parsing step over untyped JSON: it either yields an
//! immutable record or a list of field errors. Handlers never see a payload
//! that has not passed through [`PlacementPayload::parse`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FieldError, ValidationError};

/// A three-component coordinate triple.
///
/// Used for both positions and rotations; the service attaches no semantic
/// meaning to the values and imposes no range constraints. Two vectors with
/// equal components are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A position + rotation pair describing where a virtual object sits in 3D
/// space.
///
/// `rotation` is client-defined numeric data (Euler angles by convention)
/// and passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementPayload {
    pub position: Vector3,
    pub rotation: Vector3,
}

impl Vector3 {
    /// Validate one vector from untyped JSON.
    ///
    /// `path` prefixes every reported field, so a bad `z` under `position`
    /// comes back as `position.z`. All three components are checked; JSON
    /// integers are accepted and widened to `f64`. Unknown keys are ignored.
    pub fn parse(path: &str, value: &Value) -> Result<Self, Vec<FieldError>> {
        let Some(obj) = value.as_object() else {
            return Err(vec![FieldError::new(
                path,
                "expected an object with numeric x, y, z",
            )]);
        };

        let mut errors = Vec::new();
        let x = component(obj, path, "x", &mut errors);
        let y = component(obj, path, "y", &mut errors);
        let z = component(obj, path, "z", &mut errors);

        if errors.is_empty() {
            Ok(Self { x, y, z })
        } else {
            Err(errors)
        }
    }
}

/// Read one numeric component, recording an error (and returning a dummy
/// value) when it is missing or non-numeric.
fn component(obj: &Map<String, Value>, path: &str, name: &str, errors: &mut Vec<FieldError>) -> f64 {
    match obj.get(name) {
        None => {
            errors.push(FieldError::new(format!("{path}.{name}"), "field is required"));
            0.0
        }
        Some(value) => match value.as_f64() {
            Some(n) => n,
            None => {
                errors.push(FieldError::new(format!("{path}.{name}"), "expected a number"));
                0.0
            }
        },
    }
}

impl PlacementPayload {
    /// Validate a full request body from untyped JSON.
    ///
    /// Both vectors are checked even when the first one fails, so the
    /// resulting error lists every bad field in the payload at once.
    pub fn parse(value: &Value) -> Result<Self, ValidationError> {
        let Some(obj) = value.as_object() else {
            return Err(ValidationError::new(vec![FieldError::new(
                "body",
                "expected a JSON object with position and rotation",
            )]));
        };

        let mut errors = Vec::new();
        let position = vector_field(obj, "position", &mut errors);
        let rotation = vector_field(obj, "rotation", &mut errors);

        match (position, rotation) {
            (Some(position), Some(rotation)) => Ok(Self { position, rotation }),
            _ => Err(ValidationError::new(errors)),
        }
    }
}

fn vector_field(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Vector3> {
    match obj.get(name) {
        None => {
            errors.push(FieldError::new(name, "field is required"));
            None
        }
        Some(value) => match Vector3::parse(name, value) {
            Ok(vector) => Some(vector),
            Err(field_errors) => {
                errors.extend(field_errors);
                None
            }
        },
    }
}
