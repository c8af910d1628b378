use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::casework::router::{
    board_handler, card_handler, casework_router, quick_action_handler, recommendations_handler,
    transition_handler, BoardQuery, QuickActionBody, TransitionBody,
};
use crate::workflows::casework::board::QuickAction;
use crate::workflows::casework::domain::CaseStatus;
use crate::workflows::casework::service::CaseTriageService;

fn service() -> Arc<CaseTriageService<MemoryBoard, MemoryAudit>> {
    let (service, _, _) = build_service();
    Arc::new(service)
}

#[tokio::test]
async fn recommendations_handler_returns_ranked_list() {
    let response = recommendations_handler::<MemoryBoard, MemoryAudit>(
        State(service()),
        axum::Json(saturated_profile("http")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let list = body.as_array().expect("array payload");
    assert!(!list.is_empty());
    assert_eq!(list[0]["urgency"], "URGENT");
}

#[tokio::test]
async fn board_handler_applies_the_priority_filter() {
    let response = board_handler::<MemoryBoard, MemoryAudit>(
        State(service()),
        Query(BoardQuery {
            priority: Some(crate::workflows::casework::domain::CasePriority::Critical),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    for column in body["columns"].as_array().expect("columns") {
        for card in column["cards"].as_array().expect("cards") {
            assert_eq!(card["priority"], "CRITICAL");
        }
    }
    assert_eq!(body["counts"]["total"], 5);
}

#[tokio::test]
async fn card_handler_serves_details_and_missing_cards() {
    let response = card_handler::<MemoryBoard, MemoryAudit>(
        State(service()),
        Path("KYC-2024-001".to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["review_id"], "KYC-2024-001");
    assert_eq!(body["status"], "new");

    let response = card_handler::<MemoryBoard, MemoryAudit>(
        State(service()),
        Path("KYC-2024-404".to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn transition_handler_rejects_resolution_without_reason() {
    let response = transition_handler::<MemoryBoard, MemoryAudit>(
        State(service()),
        Path("KYC-2024-001".to_string()),
        axum::Json(TransitionBody {
            destination: CaseStatus::Resolved,
            reason: None,
            officer: Some("Ana Rodriguez".to_string()),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["result"], "reason_required");
}

#[tokio::test]
async fn transition_handler_commits_with_reason() {
    let response = transition_handler::<MemoryBoard, MemoryAudit>(
        State(service()),
        Path("KYC-2024-001".to_string()),
        axum::Json(TransitionBody {
            destination: CaseStatus::Resolved,
            reason: Some("Risk assessment complete".to_string()),
            officer: Some("Ana Rodriguez".to_string()),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["result"], "completed");
    assert_eq!(body["notice"]["status"], "resolved");
}

#[tokio::test]
async fn transition_handler_returns_not_found_for_unknown_card() {
    let response = transition_handler::<MemoryBoard, MemoryAudit>(
        State(service()),
        Path("KYC-2024-404".to_string()),
        axum::Json(TransitionBody {
            destination: CaseStatus::Review,
            reason: None,
            officer: None,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quick_action_handler_moves_cards() {
    let response = quick_action_handler::<MemoryBoard, MemoryAudit>(
        State(service()),
        Path("KYC-2024-002".to_string()),
        axum::Json(QuickActionBody {
            action: QuickAction::Flag,
            reason: None,
            officer: None,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["result"], "completed");
    assert_eq!(body["notice"]["status"], "flagged");
}

#[tokio::test]
async fn board_route_serves_filtered_snapshots() {
    let router = casework_router(service());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/casework/board?priority=CRITICAL")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["counts"]["total"], 5);
    assert_eq!(body["columns"][0]["title"], "New Cases");
}

#[tokio::test]
async fn transition_route_rejects_bare_resolutions() {
    let router = casework_router(service());

    let payload = json!({ "destination": "resolved" });
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/casework/board/KYC-2024-001/transition")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&payload).expect("serialize payload"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["result"], "reason_required");
}
