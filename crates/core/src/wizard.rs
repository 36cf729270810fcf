//! Step-gated entry flows: the wizard state machine and its two
//! concrete forms (case reporting, evidence intake).
//!
//! The machine is deliberately decoupled from rendering: states are
//! step indices, transitions are `next` / `previous` / submission, and
//! guards are per-step validity predicates over the accumulated form
//! data.

use serde::Serialize;

use crate::error::CoreError;
use crate::evidence::{EvidenceDraft, UploadStatus};
use crate::submission::{CaseSubmission, Priority};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Step metadata
// ---------------------------------------------------------------------------

/// Title and short description of a wizard step, as shown in the
/// step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub title: &'static str,
    pub description: &'static str,
}

/// Form data advanced through a wizard.
///
/// Implementations define the ordered step list and the validity
/// predicate for each step.
pub trait WizardForm {
    /// Ordered list of steps. Must be non-empty.
    fn steps() -> &'static [StepInfo];

    /// Whether the data required by step `index` is present and valid.
    ///
    /// Indices past the end are invalid rather than a panic.
    fn is_step_valid(&self, index: usize) -> bool;
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

/// A linear, step-gated flow over a [`WizardForm`].
///
/// `current_step` stays within `[0, N-1]`. Advancing past the last
/// step never happens via [`next`](Self::next); finishing the flow is
/// the explicit submission action, guarded by a single in-flight flag
/// so a second attempt while one is outstanding is rejected.
#[derive(Debug, Clone)]
pub struct Wizard<F: WizardForm> {
    form: F,
    current_step: usize,
    submitting: bool,
}

impl<F: WizardForm> Wizard<F> {
    /// Start the flow at step 0 with the given initial form data.
    pub fn new(form: F) -> Self {
        Self {
            form,
            current_step: 0,
            submitting: false,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access to the form data between transitions.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Whether the flow sits on its final (review/submit) step.
    pub fn at_last_step(&self) -> bool {
        self.current_step == F::steps().len() - 1
    }

    /// Whether the current step's data is valid.
    pub fn current_step_valid(&self) -> bool {
        self.form.is_step_valid(self.current_step)
    }

    /// Advance one step.
    ///
    /// No-op (returns `false`) when the current step is invalid or the
    /// flow is already on the last step.
    pub fn next(&mut self) -> bool {
        if self.at_last_step() || !self.current_step_valid() {
            return false;
        }
        self.current_step += 1;
        true
    }

    /// Go back one step. No-op (returns `false`) at step 0.
    pub fn previous(&mut self) -> bool {
        if self.current_step == 0 {
            return false;
        }
        self.current_step -= 1;
        true
    }

    /// Mark a submission as in flight.
    ///
    /// Only allowed on the last step, with valid data, and with no
    /// submission already outstanding.
    pub fn begin_submit(&mut self) -> Result<(), CoreError> {
        if !self.at_last_step() {
            return Err(CoreError::InvalidState(format!(
                "Cannot submit from step {} of {}",
                self.current_step + 1,
                F::steps().len()
            )));
        }
        if !self.current_step_valid() {
            return Err(CoreError::Validation(
                "Final step data is incomplete".to_string(),
            ));
        }
        if self.submitting {
            return Err(CoreError::InvalidState(
                "A submission is already in flight".to_string(),
            ));
        }
        self.submitting = true;
        Ok(())
    }

    /// Clear the in-flight flag once the submission settled, whether
    /// it succeeded or failed.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

// ---------------------------------------------------------------------------
// Report-case flow
// ---------------------------------------------------------------------------

/// Steps of the "report new case" flow.
pub const REPORT_STEPS: &[StepInfo] = &[
    StepInfo {
        title: "Basic Info",
        description: "Case details",
    },
    StepInfo {
        title: "Description",
        description: "What happened",
    },
    StepInfo {
        title: "Classification",
        description: "Tags & priority",
    },
    StepInfo {
        title: "Review",
        description: "Submit case",
    },
];

/// Minimum description length required by the description step.
pub const MIN_DESCRIPTION_CHARS: usize = 20;

/// Accumulated form data for the report-case flow.
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    pub name: String,
    pub company: String,
    pub description: String,
    pub tags: Vec<String>,
    pub priority: Option<Priority>,
    pub reported_at: Option<Timestamp>,
}

impl ReportDraft {
    /// Convert the finished draft into a submission payload.
    pub fn into_submission(self) -> CaseSubmission {
        CaseSubmission {
            name: Some(self.name),
            company: Some(self.company),
            status: None,
            description: Some(self.description),
            tags: Some(self.tags),
            priority: self.priority,
            reported_at: self.reported_at,
        }
    }
}

impl WizardForm for ReportDraft {
    fn steps() -> &'static [StepInfo] {
        REPORT_STEPS
    }

    fn is_step_valid(&self, index: usize) -> bool {
        match index {
            0 => !self.name.is_empty() && !self.company.is_empty(),
            1 => self.description.chars().count() >= MIN_DESCRIPTION_CHARS,
            2 => !self.tags.is_empty() && self.priority.is_some(),
            3 => true,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Evidence intake flow
// ---------------------------------------------------------------------------

/// Steps of the evidence upload / FIR generation flow.
pub const EVIDENCE_STEPS: &[StepInfo] = &[
    StepInfo {
        title: "Upload Evidence",
        description: "Add bodycam footage",
    },
    StepInfo {
        title: "Process & Timeline",
        description: "AI processing",
    },
    StepInfo {
        title: "FIR Generation",
        description: "Review and edit",
    },
];

impl WizardForm for EvidenceDraft {
    fn steps() -> &'static [StepInfo] {
        EVIDENCE_STEPS
    }

    fn is_step_valid(&self, index: usize) -> bool {
        match index {
            0 => self
                .files
                .iter()
                .any(|f| f.status == UploadStatus::Completed),
            1 => !self.processing,
            2 => true,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
