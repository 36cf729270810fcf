//! The case record and its embedded types.
//!
//! Field names serialize in camelCase to match the dashboard client.
//! `status` keeps the exact `"Active"` / `"Inactive"` spellings the
//! client filters on.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{CaseId, Timestamp};

// ---------------------------------------------------------------------------
// Case status
// ---------------------------------------------------------------------------

/// Lifecycle status of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Active,
    Inactive,
}

impl CaseStatus {
    /// Parse a status from its wire spelling.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(CoreError::Validation(format!(
                "Invalid status '{s}'. Must be one of: Active, Inactive"
            ))),
        }
    }

    /// Wire spelling of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

// ---------------------------------------------------------------------------
// Embedded records
// ---------------------------------------------------------------------------

/// An investigating office attached to a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    pub name: String,
    pub avatar_url: String,
}

/// An officer assigned to a case.
///
/// Officers are referenced by a case and own nothing themselves;
/// display avatars are derived from office data, not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Officer {
    pub id: CaseId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

// ---------------------------------------------------------------------------
// Case
// ---------------------------------------------------------------------------

/// A unit of investigative work tracked by the system.
///
/// `id` is unique across the store. `tags` preserves entry order and
/// may contain duplicates in source data; filtering treats it as a
/// membership set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: CaseId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_url: Option<String>,
    pub report_time: Timestamp,
    pub status: CaseStatus,
    pub tags: Vec<String>,
    pub offices: Vec<Office>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub officers: Option<Vec<Officer>>,
    // Legacy single-officer fallback fields kept for older clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub officer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub officer_avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Case {
    /// Whether the case carries at least one of the given tags.
    ///
    /// OR semantics: selecting more tags widens the match, never
    /// narrows it.
    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        tags.iter().any(|t| self.tags.contains(t))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_valid() {
        assert_eq!(CaseStatus::parse("Active").unwrap(), CaseStatus::Active);
        assert_eq!(CaseStatus::parse("Inactive").unwrap(), CaseStatus::Inactive);
    }

    #[test]
    fn status_parse_rejects_other_spellings() {
        assert!(CaseStatus::parse("active").is_err());
        assert!(CaseStatus::parse("ACTIVE").is_err());
        assert!(CaseStatus::parse("").is_err());
    }

    #[test]
    fn status_as_str_roundtrip() {
        for status in [CaseStatus::Active, CaseStatus::Inactive] {
            assert_eq!(CaseStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn status_serializes_with_exact_spelling() {
        assert_eq!(
            serde_json::to_string(&CaseStatus::Active).unwrap(),
            "\"Active\""
        );
        assert_eq!(
            serde_json::to_string(&CaseStatus::Inactive).unwrap(),
            "\"Inactive\""
        );
    }

    #[test]
    fn has_any_tag_matches_on_intersection() {
        let case = Case {
            id: 1,
            name: "Downtown Robbery".into(),
            description: None,
            summary: None,
            summary_url: None,
            report_time: chrono::Utc::now(),
            status: CaseStatus::Active,
            tags: vec!["Casualties".into(), "Violent".into()],
            offices: vec![],
            officers: None,
            officer_name: None,
            officer_avatar: None,
            department: None,
        };

        assert!(case.has_any_tag(&["Violent".into()]));
        assert!(case.has_any_tag(&["Narcotics".into(), "Casualties".into()]));
        assert!(!case.has_any_tag(&["Narcotics".into()]));
        assert!(!case.has_any_tag(&[]));
    }

    #[test]
    fn case_serializes_camel_case_fields() {
        let case = Case {
            id: 7,
            name: "Pharmacy Robberies".into(),
            description: None,
            summary: Some("Series of armed robberies".into()),
            summary_url: Some("/cases/7".into()),
            report_time: "2023-06-08T22:15:00Z".parse().unwrap(),
            status: CaseStatus::Active,
            tags: vec!["Theft".into()],
            offices: vec![Office {
                name: "Robbery Division".into(),
                avatar_url: "https://example.com/a.png".into(),
            }],
            officers: None,
            officer_name: None,
            officer_avatar: None,
            department: None,
        };

        let json = serde_json::to_value(&case).unwrap();
        assert_eq!(json["summaryUrl"], "/cases/7");
        assert_eq!(json["reportTime"], "2023-06-08T22:15:00Z");
        assert_eq!(json["offices"][0]["avatarUrl"], "https://example.com/a.png");
        // Absent optional fields are omitted, not null.
        assert!(json.get("officerName").is_none());
    }
}
