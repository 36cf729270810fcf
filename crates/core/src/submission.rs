//! Case submission: id assignment and field defaulting.
//!
//! A submission is a partial case. Everything missing gets a defined
//! default so the returned record is fully populated, and the store
//! inserts it at the head of the collection (most-recent-first is a
//! store invariant, not a sort parameter).

use serde::{Deserialize, Serialize};

use crate::case::{Case, CaseStatus, Office};
use crate::types::{CaseId, Timestamp};

/// Id assigned when the collection is empty and carries no seed ids.
pub const FIRST_CASE_ID: CaseId = 1;

/// Length at which a description is cut down into a summary.
pub const SUMMARY_MAX_CHARS: usize = 100;

/// Office attached to cases submitted without one.
pub const DEFAULT_OFFICE_NAME: &str = "Case Management Unit";

const DEFAULT_OFFICE_AVATAR: &str = "https://images.unsplash.com/photo-1491528323818-fdd1faba62cc?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority chosen during case reporting.
///
/// Not stored on the case record itself; it gates the classification
/// step of the report wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

// ---------------------------------------------------------------------------
// Submission input
// ---------------------------------------------------------------------------

/// Partial case data accepted by the submission operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseSubmission {
    pub name: Option<String>,
    pub company: Option<String>,
    pub status: Option<CaseStatus>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub priority: Option<Priority>,
    pub reported_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Id assignment and record construction
// ---------------------------------------------------------------------------

/// Next id: strictly greater than every id in the collection.
///
/// An empty collection falls back to [`FIRST_CASE_ID`] rather than
/// failing; the store is allowed to start from nothing.
pub fn next_case_id(cases: &[Case]) -> CaseId {
    cases
        .iter()
        .map(|c| c.id)
        .max()
        .map(|max| max + 1)
        .unwrap_or(FIRST_CASE_ID)
}

/// Build a fully populated case from a submission and an assigned id.
///
/// Defaults: name → "Untitled Case", status → Active, tags → empty,
/// description → a placeholder referencing the id, summary → the
/// description truncated to [`SUMMARY_MAX_CHARS`] with an ellipsis,
/// report time → submission time or now, offices → a single default
/// office entry. `company` and `priority` gate the report wizard but
/// are not persisted on the record.
pub fn build_case(submission: CaseSubmission, id: CaseId, now: Timestamp) -> Case {
    let name = submission
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Untitled Case".to_string());

    let summary = match submission.description.as_deref() {
        Some(desc) => truncate_summary(desc),
        None => format!("Case #{id} investigation"),
    };

    let description = submission
        .description
        .unwrap_or_else(|| format!("Case #{id} investigation details"));

    Case {
        id,
        name,
        description: Some(description),
        summary: Some(summary),
        summary_url: Some(format!("/cases/{id}")),
        report_time: submission.reported_at.unwrap_or(now),
        status: submission.status.unwrap_or(CaseStatus::Active),
        tags: submission.tags.unwrap_or_default(),
        offices: vec![Office {
            name: DEFAULT_OFFICE_NAME.to_string(),
            avatar_url: DEFAULT_OFFICE_AVATAR.to_string(),
        }],
        officers: None,
        officer_name: None,
        officer_avatar: None,
        department: None,
    }
}

/// Truncate a description into a summary, appending an ellipsis when
/// anything was cut. Operates on characters, not bytes.
fn truncate_summary(description: &str) -> String {
    if description.chars().count() <= SUMMARY_MAX_CHARS {
        return description.to_string();
    }
    let cut: String = description.chars().take(SUMMARY_MAX_CHARS).collect();
    format!("{cut}...")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
