pub mod dashboard;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /readings/evaluate                    evaluate one reading (POST)
/// /readings/defaults                    input widget bounds + starting values
/// /alert-audio                          alert sound bytes, 204 when absent
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/readings/evaluate",
            post(handlers::evaluation::evaluate_reading),
        )
        .route(
            "/readings/defaults",
            get(handlers::evaluation::reading_defaults),
        )
        .route("/alert-audio", get(handlers::audio::alert_audio))
}
