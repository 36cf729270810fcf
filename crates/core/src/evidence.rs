//! Evidence intake records and the FIR draft.
//!
//! Upload progress and AI processing are simulated by the client; the
//! core only tracks the resulting states so the evidence wizard can
//! gate its steps. FIR text content itself comes from elsewhere.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timestamp;

/// Upload state of a single evidence file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Uploading,
    Completed,
    Failed,
}

/// A file attached to a case during evidence intake.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceFile {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    /// Upload progress in percent, 0-100.
    pub progress: u8,
    pub status: UploadStatus,
}

impl EvidenceFile {
    /// Register a new upload; it starts at 0% in the `Uploading` state.
    pub fn new(name: &str, size: u64, mime_type: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            size,
            mime_type: mime_type.to_string(),
            progress: 0,
            status: UploadStatus::Uploading,
        }
    }
}

/// A dated entry on the FIR timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub time: Timestamp,
    pub description: String,
}

/// The in-progress First Information Report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirDraft {
    pub summary: String,
    pub suggested_tags: Vec<String>,
    pub selected_tags: Vec<String>,
    pub timeline_events: Vec<TimelineEvent>,
    pub officer_notes: String,
}

/// Accumulated form data for the evidence intake flow.
#[derive(Debug, Clone, Default)]
pub struct EvidenceDraft {
    pub files: Vec<EvidenceFile>,
    /// True while the simulated processing pass is still running.
    pub processing: bool,
    pub fir: FirDraft,
}

impl EvidenceDraft {
    /// Drop a file from the upload list.
    pub fn remove_file(&mut self, id: Uuid) {
        self.files.retain(|f| f.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_file_starts_uploading_at_zero() {
        let file = EvidenceFile::new("clip.mp4", 2048, "video/mp4");
        assert_eq!(file.status, UploadStatus::Uploading);
        assert_eq!(file.progress, 0);
        assert_eq!(file.name, "clip.mp4");
    }

    #[test]
    fn files_get_distinct_ids() {
        let a = EvidenceFile::new("a.mp4", 1, "video/mp4");
        let b = EvidenceFile::new("b.mp4", 1, "video/mp4");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn remove_file_drops_only_the_target() {
        let mut draft = EvidenceDraft::default();
        let keep = EvidenceFile::new("keep.mp4", 1, "video/mp4");
        let drop = EvidenceFile::new("drop.mp4", 1, "video/mp4");
        let drop_id = drop.id;
        draft.files = vec![keep.clone(), drop];

        draft.remove_file(drop_id);
        assert_eq!(draft.files.len(), 1);
        assert_eq!(draft.files[0].id, keep.id);
    }
}
