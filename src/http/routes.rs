//! Route table.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{add_country, health, list_countries, AppState};

// Route path constants - single source of truth for all API paths
pub const COUNTRIES: &str = "/countries";
pub const HEALTH: &str = "/health";

/// Builds the application router: `(method, path)` to handler.
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | GET | `/countries` | [`list_countries`] |
/// | POST | `/countries` | [`add_country`] |
/// | GET | `/health` | [`health`] |
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(COUNTRIES, get(list_countries).post(add_country))
        .route(HEALTH, get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
