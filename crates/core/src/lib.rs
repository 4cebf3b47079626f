//! Domain types for the WebXR object placement service.
//!
//! Pure data and validation logic: no HTTP, no async, no I/O. The API crate
//! layers the transport on top of these types.

pub mod error;
pub mod placement;

pub use error::{FieldError, ValidationError};
pub use placement::{PlacementPayload, Vector3};
