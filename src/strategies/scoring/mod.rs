//! Pure scoring core. Everything here is deterministic arithmetic over a
//! strategy and one session's selections; persistence and transport live in
//! the service and router layers.

mod grading;
mod rules;

pub use grading::grade_for;
pub use rules::{live_score, max_score};

use serde::Serialize;

use super::domain::{Grade, SectionId, Selections, Strategy};

/// Scorecard for one strategy and one session's selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub score: i32,
    pub max_score: i32,
    pub grade: Grade,
    pub message: String,
    pub sections: Vec<SectionScore>,
}

/// Per-section subtotal backing the scorecard breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionScore {
    pub section_id: SectionId,
    pub title: String,
    pub points: i32,
    pub ceiling: i32,
}

/// Score `strategy` against `selections` and resolve the grade and its
/// configured message. The top-line score is the sum of the section
/// subtotals, so the breakdown always reconciles with the headline number.
pub fn score_strategy(strategy: &Strategy, selections: &Selections) -> ScoreSummary {
    let sections: Vec<SectionScore> = strategy
        .sections
        .iter()
        .map(|section| SectionScore {
            section_id: section.id.clone(),
            title: section.title.clone(),
            points: section
                .items
                .iter()
                .map(|item| rules::item_points(item, selections))
                .fold(0, i32::saturating_add),
            ceiling: section
                .items
                .iter()
                .map(rules::item_ceiling)
                .fold(0, i32::saturating_add),
        })
        .collect();

    let score = sections
        .iter()
        .map(|section| section.points)
        .fold(0, i32::saturating_add);
    let grade = grading::grade_for(score, &strategy.grade_thresholds);

    ScoreSummary {
        score,
        max_score: rules::max_score(&strategy.sections),
        grade,
        message: strategy.grade_messages.message_for(grade).to_string(),
        sections,
    }
}
