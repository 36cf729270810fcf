//! The case query pipeline: filter, sort, paginate.
//!
//! The pipeline applies its stages in a fixed order — search filter,
//! status filter, tag filter, stable sort, pagination — and is a pure
//! function over a snapshot of the collection. The store layer calls
//! it under its read lock; nothing here mutates anything.

use serde::{Deserialize, Serialize};

use crate::case::{Case, CaseStatus};
use crate::error::CoreError;

/// Default page size when the caller does not specify one.
pub const DEFAULT_PER_PAGE: u32 = 8;

// ---------------------------------------------------------------------------
// Sort parameters
// ---------------------------------------------------------------------------

/// Case field a listing can be sorted by.
///
/// `Tags` and `Offices` are accepted but compare as equal for every
/// pair of cases, leaving records in arrival order. That no-op is a
/// defined fallback for non-scalar fields, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Name,
    Summary,
    ReportTime,
    Status,
    Tags,
    Offices,
}

impl SortField {
    /// Parse a sort field from its wire spelling.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "summary" => Ok(Self::Summary),
            "reportTime" => Ok(Self::ReportTime),
            "status" => Ok(Self::Status),
            "tags" => Ok(Self::Tags),
            "offices" => Ok(Self::Offices),
            _ => Err(CoreError::Validation(format!(
                "Unknown sort field '{s}'. Must be one of: \
                 id, name, summary, reportTime, status, tags, offices"
            ))),
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction from its wire spelling.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(CoreError::Validation(format!(
                "Unknown sort direction '{s}'. Must be one of: asc, desc"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A fully-resolved case listing query.
///
/// `page` is 1-based. `tags` uses OR semantics: a case matches if it
/// carries any of the listed tags.
#[derive(Debug, Clone)]
pub struct CaseQuery {
    pub search: String,
    pub sort_by: SortField,
    pub sort_direction: SortDirection,
    pub page: u32,
    pub per_page: u32,
    pub status: Option<CaseStatus>,
    pub tags: Vec<String>,
}

impl Default for CaseQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_by: SortField::Id,
            sort_direction: SortDirection::Desc,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            status: None,
            tags: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Pagination metadata computed from the post-filter, pre-page count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u32,
    pub items_per_page: u32,
}

/// One page of matching cases plus pagination metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseQueryResult {
    pub cases: Vec<Case>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run the query pipeline over a snapshot of the collection.
///
/// Stages, in fixed order:
///
/// 1. Search filter: case-insensitive substring match against name OR
///    summary. An empty search string keeps everything; a case with no
///    summary survives only if its name matches.
/// 2. Status filter: exact match, if a status was given.
/// 3. Tag filter: keep cases whose tags intersect the filter list.
/// 4. Stable sort by the requested field and direction.
/// 5. Pagination: `total_items` is the post-filter count; a page past
///    the end yields an empty slice without error or clamping.
///
/// `per_page == 0` is a precondition violation and fails with a
/// validation error. Zero matching items produce zero total pages.
pub fn run_query(cases: &[Case], query: &CaseQuery) -> Result<CaseQueryResult, CoreError> {
    if query.per_page == 0 {
        return Err(CoreError::Validation(
            "perPage must be a positive integer".to_string(),
        ));
    }
    if query.page == 0 {
        return Err(CoreError::Validation(
            "page is 1-based and must be a positive integer".to_string(),
        ));
    }

    let mut matched: Vec<&Case> = cases
        .iter()
        .filter(|c| matches_search(c, &query.search))
        .filter(|c| query.status.map_or(true, |s| c.status == s))
        .filter(|c| query.tags.is_empty() || c.has_any_tag(&query.tags))
        .collect();

    // Vec::sort_by is stable: equal keys keep their pre-sort order.
    matched.sort_by(|a, b| {
        let ordering = compare_field(a, b, query.sort_by);
        match query.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    let total_items = matched.len() as u32;
    let total_pages = total_items.div_ceil(query.per_page);

    let offset = (query.page as usize - 1).saturating_mul(query.per_page as usize);
    let page: Vec<Case> = matched
        .into_iter()
        .skip(offset)
        .take(query.per_page as usize)
        .cloned()
        .collect();

    Ok(CaseQueryResult {
        cases: page,
        pagination: Pagination {
            current_page: query.page,
            total_pages,
            total_items,
            items_per_page: query.per_page,
        },
    })
}

/// Case-insensitive substring match against name and summary.
fn matches_search(case: &Case, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    if case.name.to_lowercase().contains(&needle) {
        return true;
    }
    case.summary
        .as_deref()
        .is_some_and(|s| s.to_lowercase().contains(&needle))
}

/// Compare two cases on a single field.
///
/// String fields compare case-insensitively; numeric and timestamp
/// fields by natural order. An absent optional value, or a non-scalar
/// field, compares as equal so the pair keeps its arrival order.
fn compare_field(a: &Case, b: &Case, field: SortField) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => compare_str(&a.name, &b.name),
        SortField::Summary => match (&a.summary, &b.summary) {
            (Some(x), Some(y)) => compare_str(x, y),
            _ => Ordering::Equal,
        },
        SortField::ReportTime => a.report_time.cmp(&b.report_time),
        SortField::Status => compare_str(a.status.as_str(), b.status.as_str()),
        // Non-scalar fields: defined no-op fallback.
        SortField::Tags | SortField::Offices => Ordering::Equal,
    }
}

fn compare_str(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
