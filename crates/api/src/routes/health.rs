use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the optional alert audio asset is present on disk.
    pub alert_audio_available: bool,
}

/// GET /health -- returns service health and asset availability.
///
/// The audio asset is optional by design, so its absence does not degrade
/// the overall status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let alert_audio_available = tokio::fs::metadata(&state.config.alert_audio_path)
        .await
        .is_ok();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        alert_audio_available,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
