use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Selections, StrategyDraft, StrategyId};
use super::repository::{RepositoryError, StrategyRepository};
use super::service::{StrategyService, StrategyServiceError};

/// Score request body. Omitting `selections` scores an untouched checklist.
#[derive(Debug, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub selections: Selections,
}

/// Router builder exposing HTTP endpoints for authoring and scoring.
pub fn strategy_router<R>(service: Arc<StrategyService<R>>) -> Router
where
    R: StrategyRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/strategies",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route("/api/v1/strategies/check", post(check_handler::<R>))
        .route(
            "/api/v1/strategies/:strategy_id",
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .route(
            "/api/v1/strategies/:strategy_id/score",
            post(score_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<StrategyService<R>>>,
    axum::Json(draft): axum::Json<StrategyDraft>,
) -> Response
where
    R: StrategyRepository + 'static,
{
    match service.create(draft) {
        Ok(strategy) => (StatusCode::CREATED, axum::Json(strategy)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<StrategyService<R>>>,
) -> Response
where
    R: StrategyRepository + 'static,
{
    match service.list() {
        Ok(overviews) => (StatusCode::OK, axum::Json(overviews)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<StrategyService<R>>>,
    Path(strategy_id): Path<String>,
) -> Response
where
    R: StrategyRepository + 'static,
{
    let id = StrategyId(strategy_id);
    match service.get(&id) {
        Ok(strategy) => (StatusCode::OK, axum::Json(strategy)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<StrategyService<R>>>,
    Path(strategy_id): Path<String>,
    axum::Json(draft): axum::Json<StrategyDraft>,
) -> Response
where
    R: StrategyRepository + 'static,
{
    let id = StrategyId(strategy_id);
    match service.update(&id, draft) {
        Ok(strategy) => (StatusCode::OK, axum::Json(strategy)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<StrategyService<R>>>,
    Path(strategy_id): Path<String>,
) -> Response
where
    R: StrategyRepository + 'static,
{
    let id = StrategyId(strategy_id);
    match service.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<StrategyService<R>>>,
    Path(strategy_id): Path<String>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    R: StrategyRepository + 'static,
{
    let id = StrategyId(strategy_id);
    match service.score(&id, &request.selections) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn check_handler<R>(
    State(service): State<Arc<StrategyService<R>>>,
    axum::Json(draft): axum::Json<StrategyDraft>,
) -> Response
where
    R: StrategyRepository + 'static,
{
    let report = service.check(&draft);
    let payload = json!({
        "savable": report.is_savable(),
        "points_label": report.points_label(),
        "max_score": report.max_score,
        "target": report.target,
        "named": report.named,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

/// Shared error mapping so every handler reports failures the same way.
fn service_error_response(error: StrategyServiceError) -> Response {
    match error {
        StrategyServiceError::NotSavable { report } => {
            let payload = json!({
                "error": "strategy is not savable",
                "report": report,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        StrategyServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({
                "error": "strategy not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        StrategyServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({
                "error": "strategy already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        StrategyServiceError::Repository(RepositoryError::Unavailable(reason)) => {
            tracing::error!(%reason, "strategy repository unavailable");
            let payload = json!({
                "error": "strategy repository unavailable",
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
