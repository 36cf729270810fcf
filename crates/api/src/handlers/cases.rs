//! Handlers for the case listing, stats, tag catalog, and submission
//! endpoints.
//!
//! Query parameters arrive as raw strings and are resolved into a
//! typed [`CaseQuery`] here; unknown sort fields, directions, or
//! status spellings surface as 400s rather than silent defaults.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use casedesk_core::case::CaseStatus;
use casedesk_core::query::{CaseQuery, SortDirection, SortField};
use casedesk_core::submission::CaseSubmission;
use casedesk_core::types::CaseId;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Raw query params for `GET /cases`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    /// Comma-separated tag list; OR semantics across entries.
    pub tags: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl CaseListParams {
    /// Resolve raw parameters into a typed query.
    fn into_query(self) -> AppResult<CaseQuery> {
        let defaults = CaseQuery::default();

        let sort_by = match self.sort_by.as_deref() {
            Some(s) => SortField::parse(s)?,
            None => defaults.sort_by,
        };
        let sort_direction = match self.sort_direction.as_deref() {
            Some(s) => SortDirection::parse(s)?,
            None => defaults.sort_direction,
        };
        let status = match self.status.as_deref() {
            Some(s) => Some(CaseStatus::parse(s)?),
            None => None,
        };
        let tags = self
            .tags
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(CaseQuery {
            search: self.search.unwrap_or_default(),
            sort_by,
            sort_direction,
            page: self.page.unwrap_or(defaults.page),
            per_page: self.per_page.unwrap_or(defaults.per_page),
            status,
            tags,
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/cases
///
/// Filtered, sorted, paginated case listing. Responds with
/// `{ "cases": [...], "pagination": {...} }`.
pub async fn list_cases(
    State(state): State<AppState>,
    Query(params): Query<CaseListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.into_query()?;
    let result = state.store.list(&query).await?;

    Ok(Json(result))
}

/// GET /api/v1/cases/stats
///
/// Aggregate counters for the dashboard stat cards.
pub async fn case_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = state.store.stats().await;

    Ok(Json(stats))
}

/// GET /api/v1/cases/tags
///
/// Deduplicated tag catalog, order of first appearance.
pub async fn case_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = state.store.tags().await;

    Ok(Json(tags))
}

/// GET /api/v1/cases/{id}
///
/// Single case lookup.
pub async fn get_case(
    State(state): State<AppState>,
    Path(id): Path<CaseId>,
) -> AppResult<impl IntoResponse> {
    let case = state.store.get(id).await?;

    Ok(Json(case))
}

/// POST /api/v1/cases
///
/// Create a case from a partial submission; missing fields get the
/// documented defaults. Responds 201 with the fully populated record.
pub async fn create_case(
    State(state): State<AppState>,
    Json(input): Json<CaseSubmission>,
) -> AppResult<impl IntoResponse> {
    let case = state.store.add_case(input).await;

    tracing::info!(case_id = case.id, "Case submitted");

    Ok((StatusCode::CREATED, Json(case)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
