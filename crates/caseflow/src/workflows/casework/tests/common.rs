use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::casework::config::TriageConfig;
use crate::workflows::casework::domain::{
    AdverseMediaItem, CaseCard, CasePriority, CaseStatus, ClientId, ClientProfile,
    ComplianceStatus, ReviewId, TransactionRecord, TransactionRisk,
};
use crate::workflows::casework::repository::{
    AuditError, AuditEvent, AuditTrail, CaseRepository, RepositoryError,
};
use crate::workflows::casework::service::CaseTriageService;

pub(super) fn triage_config() -> TriageConfig {
    TriageConfig::default()
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn transaction(amount: i64, risk: TransactionRisk) -> TransactionRecord {
    TransactionRecord {
        date: date(2024, 10, 12),
        description: "Wire transfer".to_string(),
        amount,
        risk,
    }
}

/// Profile with nothing that can trigger a rule.
pub(super) fn quiet_profile(suffix: &str) -> ClientProfile {
    ClientProfile {
        client_id: ClientId(format!("CLI-{suffix}")),
        full_name: "Quiet Client".to_string(),
        risk_rating: "Standard".to_string(),
        transaction_history: Vec::new(),
        adverse_media: Vec::new(),
        compliance_status: ComplianceStatus {
            sanctions: "Clear".to_string(),
            pep: "None".to_string(),
            aml: "Low Risk".to_string(),
        },
    }
}

/// Profile that trips every rule at once.
pub(super) fn saturated_profile(suffix: &str) -> ClientProfile {
    ClientProfile {
        client_id: ClientId(format!("CLI-{suffix}")),
        full_name: "Hans Keller".to_string(),
        risk_rating: "High".to_string(),
        transaction_history: vec![
            transaction(-5_000, TransactionRisk::High),
            transaction(12_000, TransactionRisk::High),
            transaction(900, TransactionRisk::Medium),
            transaction(-1_200, TransactionRisk::Medium),
        ],
        adverse_media: vec![
            AdverseMediaItem {
                source: "Finanzblatt".to_string(),
                headline: "Trading firm probed over shell companies".to_string(),
                date: date(2024, 9, 2),
            },
            AdverseMediaItem {
                source: "Daily Ledger".to_string(),
                headline: "Regulator questions import invoices".to_string(),
                date: date(2024, 9, 18),
            },
        ],
        compliance_status: ComplianceStatus {
            sanctions: "Potential Match".to_string(),
            pep: "Domestic PEP - Class 2".to_string(),
            aml: "High Risk".to_string(),
        },
    }
}

pub(super) fn card(suffix: &str, status: CaseStatus, priority: CasePriority) -> CaseCard {
    CaseCard {
        review_id: ReviewId(format!("KYC-2024-{suffix}")),
        client_name: format!("Client {suffix}"),
        client_id: ClientId(format!("CLI-{suffix}")),
        risk_score: 62,
        red_flags_count: 1,
        status,
        assigned_officer: "Ana Rodriguez".to_string(),
        time_in_queue: "2 days".to_string(),
        priority,
    }
}

pub(super) fn seeded_cards() -> Vec<CaseCard> {
    vec![
        CaseCard {
            risk_score: 85,
            red_flags_count: 3,
            ..card("001", CaseStatus::New, CasePriority::Critical)
        },
        card("002", CaseStatus::New, CasePriority::Medium),
        card("003", CaseStatus::Review, CasePriority::High),
        CaseCard {
            risk_score: 34,
            ..card("004", CaseStatus::Flagged, CasePriority::Critical)
        },
        CaseCard {
            risk_score: 18,
            red_flags_count: 0,
            ..card("005", CaseStatus::Resolved, CasePriority::Low)
        },
    ]
}

pub(super) fn build_service() -> (
    CaseTriageService<MemoryBoard, MemoryAudit>,
    Arc<MemoryBoard>,
    Arc<MemoryAudit>,
) {
    let repository = Arc::new(MemoryBoard::seeded(seeded_cards()));
    let audit = Arc::new(MemoryAudit::default());
    let service = CaseTriageService::new(repository.clone(), audit.clone(), triage_config());
    (service, repository, audit)
}

#[derive(Default, Clone)]
pub(super) struct MemoryBoard {
    cards: Arc<Mutex<Vec<CaseCard>>>,
}

impl MemoryBoard {
    pub(super) fn seeded(cards: Vec<CaseCard>) -> Self {
        Self {
            cards: Arc::new(Mutex::new(cards)),
        }
    }
}

impl CaseRepository for MemoryBoard {
    fn load(&self) -> Result<Vec<CaseCard>, RepositoryError> {
        Ok(self.cards.lock().expect("board mutex poisoned").clone())
    }

    fn fetch(&self, id: &ReviewId) -> Result<Option<CaseCard>, RepositoryError> {
        let guard = self.cards.lock().expect("board mutex poisoned");
        Ok(guard.iter().find(|card| &card.review_id == id).cloned())
    }

    fn replace(&self, cards: Vec<CaseCard>) -> Result<(), RepositoryError> {
        *self.cards.lock().expect("board mutex poisoned") = cards;
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAudit {
    events: Arc<Mutex<Vec<AuditEvent>>>,
}

impl MemoryAudit {
    pub(super) fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().expect("audit mutex poisoned").clone()
    }
}

impl AuditTrail for MemoryAudit {
    fn record(&self, event: AuditEvent) -> Result<(), AuditError> {
        self.events
            .lock()
            .expect("audit mutex poisoned")
            .push(event);
        Ok(())
    }
}

pub(super) struct UnavailableBoard;

impl CaseRepository for UnavailableBoard {
    fn load(&self) -> Result<Vec<CaseCard>, RepositoryError> {
        Err(RepositoryError::Unavailable("board offline".to_string()))
    }

    fn fetch(&self, _id: &ReviewId) -> Result<Option<CaseCard>, RepositoryError> {
        Err(RepositoryError::Unavailable("board offline".to_string()))
    }

    fn replace(&self, _cards: Vec<CaseCard>) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("board offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
