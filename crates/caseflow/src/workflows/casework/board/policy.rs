use serde::{Deserialize, Serialize};

use super::super::domain::{CaseCard, CaseStatus, ReviewId};

/// Menu shortcuts on a card. Each routes through the same transition
/// path as a drag, so `resolve` still demands a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    StartReview,
    Flag,
    Resolve,
}

impl QuickAction {
    pub const fn destination(self) -> CaseStatus {
        match self {
            QuickAction::StartReview => CaseStatus::Review,
            QuickAction::Flag => CaseStatus::Flagged,
            QuickAction::Resolve => CaseStatus::Resolved,
        }
    }
}

/// A requested status change, from a drag-end event or a quick action.
/// `reason` is only consulted when the destination is `resolved`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub review_id: ReviewId,
    pub destination: CaseStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

impl TransitionRequest {
    /// Non-empty resolution reason after trimming, if one was supplied.
    pub fn confirmed_reason(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
    }
}

/// Officer-facing notification for a committed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionNotice {
    pub review_id: ReviewId,
    pub client_name: String,
    pub status: CaseStatus,
}

impl TransitionNotice {
    pub fn message(&self) -> String {
        format!(
            "{} moved to {}",
            self.client_name,
            self.status.label().to_uppercase()
        )
    }
}

/// Result of planning a transition against the current board. A missing
/// resolution reason is a normal outcome, not an error: the caller
/// re-prompts and retries, and the board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The move committed; `cards` is the replacement board with only
    /// the one card's status rewritten.
    Committed {
        cards: Vec<CaseCard>,
        previous: CaseStatus,
        notice: TransitionNotice,
    },
    /// Destination is `resolved` but no usable reason was supplied.
    ReasonRequired { review_id: ReviewId },
    /// Destination equals the card's current status.
    NoOp { review_id: ReviewId },
}

#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("no case card with review id {0}")]
    UnknownCard(ReviewId),
}

/// Mediate one status change over the displayed collection. Any status
/// may move to any other status; only entering `resolved` is gated on a
/// confirmation reason. The input slice is never mutated: a committed
/// move returns a new sequence with the matching card replaced in place
/// (same position, all other fields preserved).
pub fn apply_transition(
    cards: &[CaseCard],
    request: &TransitionRequest,
) -> Result<TransitionOutcome, TransitionError> {
    let card = cards
        .iter()
        .find(|card| card.review_id == request.review_id)
        .ok_or_else(|| TransitionError::UnknownCard(request.review_id.clone()))?;

    if card.status == request.destination {
        return Ok(TransitionOutcome::NoOp {
            review_id: request.review_id.clone(),
        });
    }

    if request.destination == CaseStatus::Resolved && request.confirmed_reason().is_none() {
        return Ok(TransitionOutcome::ReasonRequired {
            review_id: request.review_id.clone(),
        });
    }

    let previous = card.status;
    let notice = TransitionNotice {
        review_id: card.review_id.clone(),
        client_name: card.client_name.clone(),
        status: request.destination,
    };

    let cards = cards
        .iter()
        .map(|existing| {
            if existing.review_id == request.review_id {
                CaseCard {
                    status: request.destination,
                    ..existing.clone()
                }
            } else {
                existing.clone()
            }
        })
        .collect();

    Ok(TransitionOutcome::Committed {
        cards,
        previous,
        notice,
    })
}
