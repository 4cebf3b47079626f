use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The service keeps no cross-request data, so the only shared item is the
/// server configuration. Cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
