use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::board::{BoardFilter, QuickAction, TransitionRequest};
use super::domain::{CasePriority, ClientProfile, ReviewId};
use super::repository::{AuditTrail, CaseRepository, RepositoryError};
use super::service::{CaseServiceError, CaseTriageService, TransitionReceipt};

const DEFAULT_OFFICER: &str = "unassigned";

/// Router builder exposing the triage endpoints over HTTP.
pub fn casework_router<R, A>(service: Arc<CaseTriageService<R, A>>) -> Router
where
    R: CaseRepository + 'static,
    A: AuditTrail + 'static,
{
    Router::new()
        .route(
            "/api/v1/casework/recommendations",
            post(recommendations_handler::<R, A>),
        )
        .route("/api/v1/casework/board", get(board_handler::<R, A>))
        .route(
            "/api/v1/casework/board/:review_id",
            get(card_handler::<R, A>),
        )
        .route(
            "/api/v1/casework/board/:review_id/transition",
            post(transition_handler::<R, A>),
        )
        .route(
            "/api/v1/casework/board/:review_id/action",
            post(quick_action_handler::<R, A>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct BoardQuery {
    pub(crate) priority: Option<CasePriority>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransitionBody {
    pub(crate) destination: super::domain::CaseStatus,
    #[serde(default)]
    pub(crate) reason: Option<String>,
    #[serde(default)]
    pub(crate) officer: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuickActionBody {
    pub(crate) action: QuickAction,
    #[serde(default)]
    pub(crate) reason: Option<String>,
    #[serde(default)]
    pub(crate) officer: Option<String>,
}

pub(crate) async fn recommendations_handler<R, A>(
    State(service): State<Arc<CaseTriageService<R, A>>>,
    axum::Json(profile): axum::Json<ClientProfile>,
) -> Response
where
    R: CaseRepository + 'static,
    A: AuditTrail + 'static,
{
    let recommendations = service.recommendations(&profile);
    (StatusCode::OK, axum::Json(recommendations)).into_response()
}

pub(crate) async fn board_handler<R, A>(
    State(service): State<Arc<CaseTriageService<R, A>>>,
    Query(query): Query<BoardQuery>,
) -> Response
where
    R: CaseRepository + 'static,
    A: AuditTrail + 'static,
{
    let filter = match query.priority {
        Some(priority) => BoardFilter::Priority(priority),
        None => BoardFilter::All,
    };

    match service.board(&filter) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn card_handler<R, A>(
    State(service): State<Arc<CaseTriageService<R, A>>>,
    Path(review_id): Path<String>,
) -> Response
where
    R: CaseRepository + 'static,
    A: AuditTrail + 'static,
{
    match service.card(&ReviewId(review_id)) {
        Ok(card) => (StatusCode::OK, axum::Json(card)).into_response(),
        Err(CaseServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "case not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn transition_handler<R, A>(
    State(service): State<Arc<CaseTriageService<R, A>>>,
    Path(review_id): Path<String>,
    axum::Json(body): axum::Json<TransitionBody>,
) -> Response
where
    R: CaseRepository + 'static,
    A: AuditTrail + 'static,
{
    let officer = body.officer.unwrap_or_else(|| DEFAULT_OFFICER.to_string());
    let request = TransitionRequest {
        review_id: ReviewId(review_id),
        destination: body.destination,
        reason: body.reason,
    };

    receipt_response(service.transition(request, &officer))
}

pub(crate) async fn quick_action_handler<R, A>(
    State(service): State<Arc<CaseTriageService<R, A>>>,
    Path(review_id): Path<String>,
    axum::Json(body): axum::Json<QuickActionBody>,
) -> Response
where
    R: CaseRepository + 'static,
    A: AuditTrail + 'static,
{
    let officer = body.officer.unwrap_or_else(|| DEFAULT_OFFICER.to_string());
    receipt_response(service.quick_action(
        ReviewId(review_id),
        body.action,
        body.reason,
        &officer,
    ))
}

fn receipt_response(result: Result<TransitionReceipt, CaseServiceError>) -> Response {
    match result {
        Ok(receipt @ TransitionReceipt::Completed { .. })
        | Ok(receipt @ TransitionReceipt::NoOp { .. }) => {
            (StatusCode::OK, axum::Json(receipt)).into_response()
        }
        // The reason prompt is part of the normal flow; 422 tells the
        // client to re-prompt and retry with a non-empty reason.
        Ok(receipt @ TransitionReceipt::ReasonRequired { .. }) => {
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(receipt)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

fn service_error_response(error: CaseServiceError) -> Response {
    let status = match &error {
        CaseServiceError::Transition(_) => StatusCode::NOT_FOUND,
        CaseServiceError::Repository(_) | CaseServiceError::Audit(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
