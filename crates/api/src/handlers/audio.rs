//! Handler for the optional alert sound asset.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// GET /api/v1/alert-audio
///
/// Serve the alert sound played when ventilation is poor. The asset is
/// optional: a missing file yields 204 No Content and the client skips
/// playback. A file that exists but cannot be read also yields 204, but is
/// logged at warn level since that points at a deployment problem rather
/// than an absent asset.
pub async fn alert_audio(State(state): State<AppState>) -> Response {
    let path = &state.config.alert_audio_path;

    match tokio::fs::read(path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "audio/mpeg")],
            bytes,
        )
            .into_response(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Alert audio asset not present, skipping");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Failed to read alert audio asset");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}
