//! Case-review triage: client recommendations and the review-board
//! transition policy, composed behind a service facade and HTTP router.

pub mod board;
pub mod config;
pub mod domain;
pub mod recommendation;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use board::{
    apply_transition, BoardCounts, BoardFilter, BoardSnapshot, CaseCardView, QuickAction, RiskBand,
    TransitionError, TransitionNotice, TransitionOutcome, TransitionRequest,
};
pub use config::TriageConfig;
pub use domain::{
    AdverseMediaItem, CaseCard, CasePriority, CaseStatus, ClientId, ClientProfile,
    ComplianceStatus, ReviewId, TransactionRecord, TransactionRisk,
};
pub use recommendation::{ActionType, Recommendation, RecommendationEngine, Urgency};
pub use repository::{AuditError, AuditEvent, AuditTrail, CaseRepository, RepositoryError};
pub use router::casework_router;
pub use service::{CaseServiceError, CaseTriageService, TransitionReceipt};
