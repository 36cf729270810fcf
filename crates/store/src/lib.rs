//! The in-memory case repository.
//!
//! [`CaseStore`] owns the collection behind a `tokio::sync::RwLock`:
//! reads run the pure query pipeline over a snapshot taken under the
//! read lock, and writes serialize behind the write lock. The store is
//! injected into handlers via application state; there is no ambient
//! global collection. Records live for the process lifetime only.

pub mod seed;

use tokio::sync::RwLock;

use casedesk_core::case::Case;
use casedesk_core::error::CoreError;
use casedesk_core::query::{run_query, CaseQuery, CaseQueryResult};
use casedesk_core::stats::{compute_stats, CaseStats};
use casedesk_core::submission::{build_case, next_case_id, CaseSubmission};
use casedesk_core::tags::collect_tags;
use casedesk_core::types::CaseId;

/// Owned, lock-guarded collection of case records.
///
/// Invariants:
/// - ids are unique across the collection,
/// - newest submissions sit at the head (most-recent-first ordering is
///   a store invariant, not a sort parameter).
#[derive(Debug, Default)]
pub struct CaseStore {
    cases: RwLock<Vec<Case>>,
}

impl CaseStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the given records, head-first.
    pub fn with_cases(cases: Vec<Case>) -> Self {
        Self {
            cases: RwLock::new(cases),
        }
    }

    /// A store pre-loaded with the demonstration records.
    pub fn seeded() -> Self {
        Self::with_cases(seed::seed_cases())
    }

    /// Number of records currently held.
    pub async fn count(&self) -> usize {
        self.cases.read().await.len()
    }

    /// Run the filter → sort → paginate pipeline over a snapshot.
    pub async fn list(&self, query: &CaseQuery) -> Result<CaseQueryResult, CoreError> {
        let cases = self.cases.read().await;
        run_query(&cases, query)
    }

    /// Look up a single case by id.
    pub async fn get(&self, id: CaseId) -> Result<Case, CoreError> {
        let cases = self.cases.read().await;
        cases
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CoreError::NotFound { entity: "Case", id })
    }

    /// Aggregate counters over a snapshot.
    pub async fn stats(&self) -> CaseStats {
        let cases = self.cases.read().await;
        compute_stats(&cases)
    }

    /// Deduplicated tag catalog, order of first appearance.
    pub async fn tags(&self) -> Vec<String> {
        let cases = self.cases.read().await;
        collect_tags(&cases)
    }

    /// Create a case from a submission and insert it at the head.
    ///
    /// Id assignment and the insert happen under one write lock so
    /// concurrent submissions cannot race to the same id.
    pub async fn add_case(&self, submission: CaseSubmission) -> Case {
        let mut cases = self.cases.write().await;
        let id = next_case_id(&cases);
        let case = build_case(submission, id, chrono::Utc::now());
        cases.insert(0, case.clone());

        tracing::info!(case_id = id, name = %case.name, "Case created");

        case
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
