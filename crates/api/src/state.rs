use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Handlers are
/// stateless request/response mappings, so configuration is all they share.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (bind address, CORS origins, alert audio path).
    pub config: Arc<ServerConfig>,
}
