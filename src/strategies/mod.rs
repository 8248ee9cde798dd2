//! Strategy checklist authoring, validation, and scoring.
//!
//! A strategy is a weighted checklist whose best case must total exactly 100
//! points before it can be saved. Scoring sessions replay a trader's
//! selections against a stored checklist and resolve a letter grade through
//! the configured threshold ladder.

pub mod domain;
pub mod repository;
pub mod router;
pub mod sample;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ChoiceOption, Grade, GradeMessages, GradeThresholds, Item, ItemId, ItemKind, Section,
    SectionId, SelectionValue, Selections, Strategy, StrategyDraft, StrategyId, StrategyOverview,
};
pub use repository::{MemoryStrategyRepository, RepositoryError, StrategyRepository};
pub use router::{strategy_router, ScoreRequest};
pub use scoring::{grade_for, live_score, max_score, score_strategy, ScoreSummary, SectionScore};
pub use service::{StrategyService, StrategyServiceError};
pub use validation::{is_savable, validate, ValidationReport, TARGET_SCORE};
