pub mod cases;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cases            list (GET), submit (POST)
/// /cases/stats      aggregate counters
/// /cases/tags       tag catalog
/// /cases/{id}       single case lookup
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/cases", cases::router())
}
