//! The single-page dashboard.
//!
//! The page is embedded into the binary at compile time so the server ships
//! as one artifact with no static directory to deploy alongside it.

use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

const DASHBOARD_HTML: &str = include_str!("../../assets/index.html");

/// GET / -- the dashboard page.
async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Mount the dashboard at the site root.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}
