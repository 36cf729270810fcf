//! Route definitions for the case endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::cases;
use crate::state::AppState;

/// Case routes mounted at `/cases`.
///
/// ```text
/// GET  /           -> list_cases
/// POST /           -> create_case
/// GET  /stats      -> case_stats
/// GET  /tags       -> case_tags
/// GET  /{id}       -> get_case
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cases::list_cases).post(cases::create_case))
        .route("/stats", get(cases::case_stats))
        .route("/tags", get(cases::case_tags))
        .route("/{id}", get(cases::get_case))
}
