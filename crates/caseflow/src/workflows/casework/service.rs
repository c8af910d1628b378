use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::board::{
    apply_transition, snapshot, BoardFilter, BoardSnapshot, QuickAction, TransitionError,
    TransitionNotice, TransitionOutcome, TransitionRequest,
};
use super::config::TriageConfig;
use super::domain::{CaseCard, CaseStatus, ClientProfile, ReviewId};
use super::recommendation::{Recommendation, RecommendationEngine};
use super::repository::{AuditError, AuditEvent, AuditTrail, CaseRepository, RepositoryError};

/// Service composing the case repository, audit trail, and
/// recommendation engine behind one typed facade.
pub struct CaseTriageService<R, A> {
    repository: Arc<R>,
    audit: Arc<A>,
    engine: Arc<RecommendationEngine>,
    config: TriageConfig,
}

impl<R, A> CaseTriageService<R, A>
where
    R: CaseRepository + 'static,
    A: AuditTrail + 'static,
{
    pub fn new(repository: Arc<R>, audit: Arc<A>, config: TriageConfig) -> Self {
        Self {
            repository,
            audit,
            engine: Arc::new(RecommendationEngine::new(config)),
            config,
        }
    }

    /// Ranked recommendations for one client profile. Pure delegation;
    /// the board state plays no part.
    pub fn recommendations(&self, client: &ClientProfile) -> Vec<Recommendation> {
        self.engine.recommend(client)
    }

    /// Render the board under the given filter. Badge counts always
    /// come from the unfiltered collection.
    pub fn board(&self, filter: &BoardFilter) -> Result<BoardSnapshot, CaseServiceError> {
        let cards = self.repository.load()?;
        Ok(snapshot(&cards, filter, self.config.escalation_risk_threshold))
    }

    /// Fetch a single card for detail views.
    pub fn card(&self, review_id: &ReviewId) -> Result<CaseCard, CaseServiceError> {
        let card = self
            .repository
            .fetch(review_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(card)
    }

    /// Drag-end path: plan the move, commit the replacement collection,
    /// and record the audit entry. A missing resolution reason returns
    /// `ReasonRequired` with the board untouched; so does a same-status
    /// drop, as `NoOp`.
    pub fn transition(
        &self,
        request: TransitionRequest,
        officer: &str,
    ) -> Result<TransitionReceipt, CaseServiceError> {
        let cards = self.repository.load()?;

        match apply_transition(&cards, &request)? {
            TransitionOutcome::Committed {
                cards,
                previous,
                notice,
            } => {
                let card = cards
                    .iter()
                    .find(|card| card.review_id == request.review_id)
                    .ok_or(RepositoryError::NotFound)?
                    .clone();
                self.repository.replace(cards)?;

                let reason = if request.destination == CaseStatus::Resolved {
                    request.confirmed_reason().map(str::to_string)
                } else {
                    None
                };
                self.audit.record(AuditEvent {
                    review_id: card.review_id.clone(),
                    client_id: card.client_id.clone(),
                    client_name: card.client_name.clone(),
                    officer: officer.to_string(),
                    from_status: previous,
                    to_status: request.destination,
                    reason,
                    recorded_at: Utc::now(),
                })?;

                Ok(TransitionReceipt::Completed { notice })
            }
            TransitionOutcome::ReasonRequired { review_id } => {
                Ok(TransitionReceipt::ReasonRequired { review_id })
            }
            TransitionOutcome::NoOp { review_id } => Ok(TransitionReceipt::NoOp { review_id }),
        }
    }

    /// Card-menu shortcut; routes through the identical transition path
    /// so `resolve` still demands a reason.
    pub fn quick_action(
        &self,
        review_id: ReviewId,
        action: QuickAction,
        reason: Option<String>,
        officer: &str,
    ) -> Result<TransitionReceipt, CaseServiceError> {
        self.transition(
            TransitionRequest {
                review_id,
                destination: action.destination(),
                reason,
            },
            officer,
        )
    }
}

/// Outcome of a transition request as seen by callers. `ReasonRequired`
/// and `NoOp` are normal paths: the board was not touched and the user
/// may retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum TransitionReceipt {
    Completed { notice: TransitionNotice },
    ReasonRequired { review_id: ReviewId },
    NoOp { review_id: ReviewId },
}

/// Error raised by the triage service.
#[derive(Debug, thiserror::Error)]
pub enum CaseServiceError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Audit(#[from] AuditError),
}
