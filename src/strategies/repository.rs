use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::domain::{Strategy, StrategyId};

/// Storage abstraction so the service module can be exercised in isolation.
pub trait StrategyRepository: Send + Sync {
    fn insert(&self, strategy: Strategy) -> Result<Strategy, RepositoryError>;
    fn update(&self, strategy: Strategy) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &StrategyId) -> Result<Option<Strategy>, RepositoryError>;
    fn list(&self) -> Result<Vec<Strategy>, RepositoryError>;
    fn delete(&self, id: &StrategyId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("strategy already exists")]
    Conflict,
    #[error("strategy not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// In-memory store keyed by id; `BTreeMap` keeps listings in stable id
/// order.
#[derive(Default, Clone)]
pub struct MemoryStrategyRepository {
    strategies: Arc<Mutex<BTreeMap<StrategyId, Strategy>>>,
}

impl StrategyRepository for MemoryStrategyRepository {
    fn insert(&self, strategy: Strategy) -> Result<Strategy, RepositoryError> {
        let mut guard = self.strategies.lock().expect("repository mutex poisoned");
        if guard.contains_key(&strategy.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(strategy.id.clone(), strategy.clone());
        Ok(strategy)
    }

    fn update(&self, strategy: Strategy) -> Result<(), RepositoryError> {
        let mut guard = self.strategies.lock().expect("repository mutex poisoned");
        if guard.contains_key(&strategy.id) {
            guard.insert(strategy.id.clone(), strategy);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &StrategyId) -> Result<Option<Strategy>, RepositoryError> {
        let guard = self.strategies.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Strategy>, RepositoryError> {
        let guard = self.strategies.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn delete(&self, id: &StrategyId) -> Result<(), RepositoryError> {
        let mut guard = self.strategies.lock().expect("repository mutex poisoned");
        match guard.remove(id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound),
        }
    }
}
