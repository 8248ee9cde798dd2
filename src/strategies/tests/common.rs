use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::strategies::domain::{
    ChoiceOption, Item, ItemId, ItemKind, Section, SectionId, Selections, Strategy, StrategyDraft,
    StrategyId,
};
use crate::strategies::repository::{MemoryStrategyRepository, RepositoryError, StrategyRepository};
use crate::strategies::{strategy_router, StrategyService};

pub(super) fn checkbox(id: &str, label: &str, points: i32) -> Item {
    Item {
        id: ItemId(id.to_string()),
        label: label.to_string(),
        order: 0,
        kind: ItemKind::Checkbox { points },
    }
}

pub(super) fn radio(id: &str, label: &str, options: &[(&str, i32)]) -> Item {
    Item {
        id: ItemId(id.to_string()),
        label: label.to_string(),
        order: 0,
        kind: ItemKind::Radio {
            options: options
                .iter()
                .map(|(label, points)| ChoiceOption {
                    label: label.to_string(),
                    points: *points,
                })
                .collect(),
        },
    }
}

pub(super) fn section(id: &str, title: &str, items: Vec<Item>) -> Section {
    Section {
        id: SectionId(id.to_string()),
        title: title.to_string(),
        order: 0,
        items,
    }
}

/// A named draft whose best case is exactly 100: 30 + 20 + 30 + 20.
pub(super) fn savable_draft() -> StrategyDraft {
    StrategyDraft {
        name: "Breakout Momentum".to_string(),
        description: Some("Daily range breakout with volume confirmation.".to_string()),
        sections: vec![
            section(
                "setup",
                "Setup",
                vec![
                    checkbox("setup-trend", "Trading with the daily trend", 30),
                    checkbox("setup-volume", "Volume above 20-day average", 20),
                ],
            ),
            section(
                "trigger",
                "Trigger",
                vec![
                    radio(
                        "trigger-close",
                        "Breakout close quality",
                        &[("Weak close", 10), ("Strong close", 30)],
                    ),
                    checkbox("trigger-retest", "Retest held as support", 20),
                ],
            ),
        ],
        ..StrategyDraft::default()
    }
}

pub(super) fn underweight_draft() -> StrategyDraft {
    let mut draft = savable_draft();
    draft.sections[0].items[1] = checkbox("setup-volume", "Volume above 20-day average", 10);
    draft
}

pub(super) fn overweight_draft() -> StrategyDraft {
    let mut draft = savable_draft();
    draft.sections[0].items[1] = checkbox("setup-volume", "Volume above 20-day average", 30);
    draft
}

pub(super) fn unnamed_draft() -> StrategyDraft {
    let mut draft = savable_draft();
    draft.name = "   ".to_string();
    draft
}

/// Selections that check every positive item and take the strong close:
/// the draft's full 100 points.
pub(super) fn full_marks_selections() -> Selections {
    let mut selections = Selections::new();
    selections.toggle(&ItemId("setup-trend".to_string()));
    selections.toggle(&ItemId("setup-volume".to_string()));
    selections.choose(&ItemId("trigger-close".to_string()), "Strong close");
    selections.toggle(&ItemId("trigger-retest".to_string()));
    selections
}

pub(super) fn build_service() -> (
    StrategyService<MemoryStrategyRepository>,
    Arc<MemoryStrategyRepository>,
) {
    let repository = Arc::new(MemoryStrategyRepository::default());
    let service = StrategyService::new(repository.clone());
    (service, repository)
}

pub(super) struct ConflictRepository;

impl StrategyRepository for ConflictRepository {
    fn insert(&self, _strategy: Strategy) -> Result<Strategy, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _strategy: Strategy) -> Result<(), RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &StrategyId) -> Result<Option<Strategy>, RepositoryError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<Strategy>, RepositoryError> {
        Ok(Vec::new())
    }

    fn delete(&self, _id: &StrategyId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Conflict)
    }
}

pub(super) struct UnavailableRepository;

impl StrategyRepository for UnavailableRepository {
    fn insert(&self, _strategy: Strategy) -> Result<Strategy, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _strategy: Strategy) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &StrategyId) -> Result<Option<Strategy>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Strategy>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: &StrategyId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn strategy_router_with_service(
    service: StrategyService<MemoryStrategyRepository>,
) -> axum::Router {
    strategy_router(Arc::new(service))
}
