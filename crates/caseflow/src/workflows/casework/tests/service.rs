use std::sync::Arc;

use super::common::*;
use crate::workflows::casework::board::{BoardFilter, QuickAction, TransitionRequest};
use crate::workflows::casework::domain::{CaseStatus, ReviewId};
use crate::workflows::casework::repository::CaseRepository;
use crate::workflows::casework::service::{
    CaseServiceError, CaseTriageService, TransitionReceipt,
};

fn review(suffix: &str) -> ReviewId {
    ReviewId(format!("KYC-2024-{suffix}"))
}

#[test]
fn transition_commits_and_records_an_audit_entry() {
    let (service, repository, audit) = build_service();

    let receipt = service
        .transition(
            TransitionRequest {
                review_id: review("001"),
                destination: CaseStatus::Review,
                reason: None,
            },
            "Ana Rodriguez",
        )
        .expect("transition succeeds");

    match receipt {
        TransitionReceipt::Completed { notice } => {
            assert_eq!(notice.status, CaseStatus::Review);
        }
        other => panic!("expected completion, got {other:?}"),
    }

    let stored = repository
        .fetch(&review("001"))
        .expect("repository up")
        .expect("card kept");
    assert_eq!(stored.status, CaseStatus::Review);

    let events = audit.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].officer, "Ana Rodriguez");
    assert_eq!(events[0].from_status, CaseStatus::New);
    assert_eq!(events[0].to_status, CaseStatus::Review);
    assert!(events[0].reason.is_none());
}

#[test]
fn resolution_reason_lands_in_the_audit_trail() {
    let (service, repository, audit) = build_service();

    let receipt = service
        .transition(
            TransitionRequest {
                review_id: review("003"),
                destination: CaseStatus::Resolved,
                reason: Some("  Client approved  ".to_string()),
            },
            "Ana Rodriguez",
        )
        .expect("transition succeeds");
    assert!(matches!(receipt, TransitionReceipt::Completed { .. }));

    let stored = repository
        .fetch(&review("003"))
        .expect("repository up")
        .expect("card kept");
    assert_eq!(stored.status, CaseStatus::Resolved);

    let events = audit.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].reason.as_deref(), Some("Client approved"));
}

#[test]
fn missing_reason_leaves_the_board_and_audit_untouched() {
    let (service, repository, audit) = build_service();

    let receipt = service
        .transition(
            TransitionRequest {
                review_id: review("001"),
                destination: CaseStatus::Resolved,
                reason: Some("   ".to_string()),
            },
            "Ana Rodriguez",
        )
        .expect("reason gate is not an error");
    assert!(matches!(receipt, TransitionReceipt::ReasonRequired { .. }));

    let stored = repository
        .fetch(&review("001"))
        .expect("repository up")
        .expect("card kept");
    assert_eq!(stored.status, CaseStatus::New);
    assert!(audit.events().is_empty());
}

#[test]
fn quick_actions_route_through_the_transition_path() {
    let (service, repository, audit) = build_service();

    let receipt = service
        .quick_action(review("002"), QuickAction::StartReview, None, "Ana Rodriguez")
        .expect("quick action succeeds");
    assert!(matches!(receipt, TransitionReceipt::Completed { .. }));
    let stored = repository
        .fetch(&review("002"))
        .expect("repository up")
        .expect("card kept");
    assert_eq!(stored.status, CaseStatus::Review);

    // Resolve shortcut still demands the reason prompt.
    let receipt = service
        .quick_action(review("002"), QuickAction::Resolve, None, "Ana Rodriguez")
        .expect("reason gate is not an error");
    assert!(matches!(receipt, TransitionReceipt::ReasonRequired { .. }));
    assert_eq!(audit.events().len(), 1);
}

#[test]
fn unknown_card_surfaces_as_transition_error() {
    let (service, _, _) = build_service();

    let error = service
        .transition(
            TransitionRequest {
                review_id: review("404"),
                destination: CaseStatus::Review,
                reason: None,
            },
            "Ana Rodriguez",
        )
        .expect_err("missing card");
    assert!(matches!(error, CaseServiceError::Transition(_)));
}

#[test]
fn repository_outage_is_reported() {
    let service = CaseTriageService::new(
        Arc::new(UnavailableBoard),
        Arc::new(MemoryAudit::default()),
        triage_config(),
    );

    let error = service.board(&BoardFilter::All).expect_err("board offline");
    assert!(matches!(error, CaseServiceError::Repository(_)));
}

#[test]
fn board_snapshot_reflects_committed_moves() {
    let (service, _, _) = build_service();

    let before = service.board(&BoardFilter::All).expect("board loads");
    assert_eq!(before.counts.new, 2);
    assert_eq!(before.counts.flagged, 1);

    service
        .transition(
            TransitionRequest {
                review_id: review("001"),
                destination: CaseStatus::Flagged,
                reason: None,
            },
            "Ana Rodriguez",
        )
        .expect("transition succeeds");

    let after = service.board(&BoardFilter::All).expect("board loads");
    assert_eq!(after.counts.new, 1);
    assert_eq!(after.counts.flagged, 2);
    assert_eq!(after.counts.total, before.counts.total);
}

#[test]
fn recommendations_do_not_consult_the_board() {
    let service = CaseTriageService::new(
        Arc::new(UnavailableBoard),
        Arc::new(MemoryAudit::default()),
        triage_config(),
    );

    let recommendations = service.recommendations(&saturated_profile("offline"));
    assert!(!recommendations.is_empty());
}
