use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CaseCard, CaseStatus, ClientId, ReviewId};

/// Storage abstraction for the board's card collection so the service
/// module can be exercised in isolation. Each session owns its own
/// collection; `replace` swaps the whole sequence after a committed
/// transition, matching the board's immutable-update semantics.
pub trait CaseRepository: Send + Sync {
    fn load(&self) -> Result<Vec<CaseCard>, RepositoryError>;
    fn fetch(&self, id: &ReviewId) -> Result<Option<CaseCard>, RepositoryError>;
    fn replace(&self, cards: Vec<CaseCard>) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("case not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Injected audit capability. Every committed transition is recorded;
/// resolutions additionally carry the confirmation reason. Kept as a
/// trait rather than a global logger so tests and adapters can capture
/// the stream.
pub trait AuditTrail: Send + Sync {
    fn record(&self, event: AuditEvent) -> Result<(), AuditError>;
}

/// One audit-trail entry for a committed status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub review_id: ReviewId,
    pub client_id: ClientId,
    pub client_name: String,
    pub officer: String,
    pub from_status: CaseStatus,
    pub to_status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Audit dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("audit sink unavailable: {0}")]
    Transport(String),
}
