use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::strategies::sample;
use crate::strategies::StrategyService;

fn json_request<T: serde::Serialize>(method: Method, uri: &str, body: &T) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn bare_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn create_route_persists_valid_drafts() {
    let (service, _) = build_service();
    let router = strategy_router_with_service(service);

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/strategies",
            &savable_draft(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .starts_with("strat-"));
    assert_eq!(
        payload.get("name").and_then(Value::as_str),
        Some("Breakout Momentum")
    );
}

#[tokio::test]
async fn create_handler_rejects_unbalanced_drafts() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let response = crate::strategies::router::create_handler(
        State(service),
        axum::Json(underweight_draft()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload
            .get("report")
            .and_then(|report| report.get("max_score"))
            .and_then(Value::as_i64),
        Some(90)
    );
}

#[tokio::test]
async fn create_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(StrategyService::new(Arc::new(ConflictRepository)));

    let response = crate::strategies::router::create_handler::<ConflictRepository>(
        State(service),
        axum::Json(savable_draft()),
    )
    .await;

    assert_conflict_response(response);
}

#[tokio::test]
async fn create_handler_reports_repository_outage() {
    let service = Arc::new(StrategyService::new(Arc::new(UnavailableRepository)));

    let response = crate::strategies::router::create_handler::<UnavailableRepository>(
        State(service),
        axum::Json(savable_draft()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn get_route_returns_stored_strategy() {
    let (service, _) = build_service();
    let created = service.create(savable_draft()).expect("create succeeds");
    let router = strategy_router_with_service(service);

    let response = router
        .clone()
        .oneshot(bare_request(
            Method::GET,
            &format!("/api/v1/strategies/{}", created.id.0),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("name").and_then(Value::as_str),
        Some("Breakout Momentum")
    );

    let response = router
        .oneshot(bare_request(Method::GET, "/api/v1/strategies/strat-999999"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_route_returns_overview_rows() {
    let (service, _) = build_service();
    service.create(savable_draft()).expect("create succeeds");
    let mut draft = savable_draft();
    draft.name = "Second System".to_string();
    service.create(draft).expect("create succeeds");
    let router = strategy_router_with_service(service);

    let response = router
        .oneshot(bare_request(Method::GET, "/api/v1/strategies"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let rows = payload.as_array().expect("array payload");
    assert_eq!(rows.len(), 2);
    assert!(rows[0].get("id").is_some());
    assert!(rows[0].get("sections").is_none());
}

#[tokio::test]
async fn update_route_replaces_strategy() {
    let (service, _) = build_service();
    let created = service.create(savable_draft()).expect("create succeeds");
    let router = strategy_router_with_service(service);

    let mut draft = savable_draft();
    draft.name = "Breakout Momentum v2".to_string();

    let response = router
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/strategies/{}", created.id.0),
            &draft,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("name").and_then(Value::as_str),
        Some("Breakout Momentum v2")
    );

    let response = router
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/strategies/strat-999999",
            &draft,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_route_returns_no_content() {
    let (service, _) = build_service();
    let created = service.create(savable_draft()).expect("create succeeds");
    let router = strategy_router_with_service(service);
    let uri = format!("/api/v1/strategies/{}", created.id.0);

    let response = router
        .clone()
        .oneshot(bare_request(Method::DELETE, &uri))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(bare_request(Method::DELETE, &uri))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn score_route_resolves_grade() {
    let (service, _) = build_service();
    let created = service
        .create(sample::sample_draft())
        .expect("sample draft is savable");
    let router = strategy_router_with_service(service);

    let body = json!({
        "selections": {
            "bias-killzone": true,
            "bias-htf": true,
            "entry-sweep": true,
            "entry-mss": true,
            "entry-fvg": "Clean gap",
            "entry-rr": true,
        }
    });

    let response = router
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/strategies/{}/score", created.id.0),
            &body,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("score").and_then(Value::as_i64), Some(100));
    assert_eq!(payload.get("max_score").and_then(Value::as_i64), Some(100));
    assert_eq!(payload.get("grade"), Some(&json!("A+")));
    assert_eq!(payload.get("message"), Some(&json!("Full size")));
}

#[tokio::test]
async fn score_route_defaults_to_empty_selections() {
    let (service, _) = build_service();
    let created = service
        .create(sample::sample_draft())
        .expect("sample draft is savable");
    let router = strategy_router_with_service(service);

    let response = router
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/strategies/{}/score", created.id.0),
            &json!({}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("score").and_then(Value::as_i64), Some(0));
    assert_eq!(payload.get("grade"), Some(&json!("NO TRADE")));
    assert_eq!(payload.get("message"), Some(&json!("No entry")));
}

#[tokio::test]
async fn score_route_requires_a_json_body() {
    let (service, _) = build_service();
    let created = service
        .create(sample::sample_draft())
        .expect("sample draft is savable");
    let router = strategy_router_with_service(service);

    let response = router
        .oneshot(bare_request(
            Method::POST,
            &format!("/api/v1/strategies/{}/score", created.id.0),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn score_route_unknown_strategy_is_not_found() {
    let (service, _) = build_service();
    let router = strategy_router_with_service(service);

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/strategies/strat-999999/score",
            &json!({}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn check_route_reports_draft_state() {
    let (service, _) = build_service();
    let router = strategy_router_with_service(service);

    let response = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/strategies/check",
            &underweight_draft(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("savable"), Some(&json!(false)));
    assert_eq!(payload.get("max_score").and_then(Value::as_i64), Some(90));
    assert_eq!(payload.get("points_label"), Some(&json!("90/100")));

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/strategies/check",
            &savable_draft(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("savable"), Some(&json!(true)));
}
