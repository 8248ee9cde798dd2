use serde::Serialize;

use super::domain::{Section, Strategy};
use super::scoring;

/// Points a checklist must be worth, exactly, before it can be saved.
pub const TARGET_SCORE: i32 = 100;

/// Outcome of checking a draft against the save gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub max_score: i32,
    pub target: i32,
    pub named: bool,
}

impl ValidationReport {
    /// Whether the draft can be persisted: named, and weighted to exactly
    /// the target.
    pub fn is_savable(&self) -> bool {
        self.named && self.max_score == self.target
    }

    /// Budget readout for editors, e.g. `87/100`.
    pub fn points_label(&self) -> String {
        format!("{}/{}", self.max_score, self.target)
    }
}

/// Check a draft's name and section weights against the save gate. Blank
/// and whitespace-only names do not count as named.
pub fn validate(name: &str, sections: &[Section]) -> ValidationReport {
    ValidationReport {
        max_score: scoring::max_score(sections),
        target: TARGET_SCORE,
        named: !name.trim().is_empty(),
    }
}

/// Save gate for a fully built strategy.
pub fn is_savable(strategy: &Strategy) -> bool {
    validate(&strategy.name, &strategy.sections).is_savable()
}
