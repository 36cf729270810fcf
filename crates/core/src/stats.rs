//! Aggregate counters for the dashboard stat cards.

use serde::{Deserialize, Serialize};

use crate::case::{Case, CaseStatus};

/// A percentage change indicator shown next to a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthFigure {
    pub percentage: u32,
    pub is_positive: bool,
}

/// Case counters plus static growth figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStats {
    pub total_cases: u32,
    pub active_cases: u32,
    pub pending_cases: u32,
    pub solved_cases: u32,
    pub case_growth: GrowthFigure,
    pub pending_growth: GrowthFigure,
    pub solved_growth: GrowthFigure,
}

/// Compute counters over a snapshot of the collection.
///
/// `pending_cases` equals `active_cases` — a deliberate simplification
/// carried over from the product's current stat definition. The growth
/// figures are static placeholders until a history source exists.
pub fn compute_stats(cases: &[Case]) -> CaseStats {
    let total = cases.len() as u32;
    let active = cases
        .iter()
        .filter(|c| c.status == CaseStatus::Active)
        .count() as u32;

    CaseStats {
        total_cases: total,
        active_cases: active,
        pending_cases: active,
        solved_cases: total - active,
        case_growth: GrowthFigure {
            percentage: 15,
            is_positive: true,
        },
        pending_growth: GrowthFigure {
            percentage: 5,
            is_positive: true,
        },
        solved_growth: GrowthFigure {
            percentage: 8,
            is_positive: false,
        },
    }
}
