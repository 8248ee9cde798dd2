use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{Selections, Strategy, StrategyDraft, StrategyId, StrategyOverview};
use super::repository::{RepositoryError, StrategyRepository};
use super::scoring::{score_strategy, ScoreSummary};
use super::validation::{validate, ValidationReport};

/// Service composing the save gate, repository, and scoring core.
pub struct StrategyService<R> {
    repository: Arc<R>,
}

static STRATEGY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_strategy_id() -> StrategyId {
    let id = STRATEGY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    StrategyId(format!("strat-{id:06}"))
}

impl<R> StrategyService<R>
where
    R: StrategyRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Run a draft through the save gate without touching the repository.
    pub fn check(&self, draft: &StrategyDraft) -> ValidationReport {
        validate(&draft.name, &draft.sections)
    }

    /// Persist a new strategy, returning the stored copy with its assigned
    /// id. Drafts that fail the save gate are rejected before any id is
    /// consumed.
    pub fn create(&self, draft: StrategyDraft) -> Result<Strategy, StrategyServiceError> {
        let report = self.check(&draft);
        if !report.is_savable() {
            return Err(StrategyServiceError::NotSavable { report });
        }

        let strategy = draft.into_strategy(next_strategy_id(), Some(Utc::now()));
        let stored = self.repository.insert(strategy)?;
        Ok(stored)
    }

    /// Replace a stored strategy with a fresh draft. The save gate applies
    /// here too, so a stored strategy can never drift off the 100-point
    /// target. The original creation timestamp is preserved.
    pub fn update(
        &self,
        strategy_id: &StrategyId,
        draft: StrategyDraft,
    ) -> Result<Strategy, StrategyServiceError> {
        let report = self.check(&draft);
        if !report.is_savable() {
            return Err(StrategyServiceError::NotSavable { report });
        }

        let existing = self
            .repository
            .fetch(strategy_id)?
            .ok_or(RepositoryError::NotFound)?;

        let strategy = draft.into_strategy(strategy_id.clone(), existing.created_at);
        self.repository.update(strategy.clone())?;
        Ok(strategy)
    }

    /// Fetch a stored strategy for API responses.
    pub fn get(&self, strategy_id: &StrategyId) -> Result<Strategy, StrategyServiceError> {
        let strategy = self
            .repository
            .fetch(strategy_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(strategy)
    }

    /// List stored strategies as lightweight overviews.
    pub fn list(&self) -> Result<Vec<StrategyOverview>, StrategyServiceError> {
        let strategies = self.repository.list()?;
        Ok(strategies.iter().map(Strategy::overview).collect())
    }

    /// Remove a stored strategy.
    pub fn delete(&self, strategy_id: &StrategyId) -> Result<(), StrategyServiceError> {
        self.repository.delete(strategy_id)?;
        Ok(())
    }

    /// Score a stored strategy against one session's selections.
    pub fn score(
        &self,
        strategy_id: &StrategyId,
        selections: &Selections,
    ) -> Result<ScoreSummary, StrategyServiceError> {
        let strategy = self.get(strategy_id)?;
        Ok(score_strategy(&strategy, selections))
    }
}

/// Error raised by the strategy service.
#[derive(Debug, thiserror::Error)]
pub enum StrategyServiceError {
    #[error("draft not savable: weights {}, named {}", .report.points_label(), .report.named)]
    NotSavable { report: ValidationReport },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
