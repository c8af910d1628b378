use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use caseflow::workflows::casework::{
    AuditError, AuditEvent, AuditTrail, CaseCard, CasePriority, CaseRepository, CaseStatus,
    ClientId, RepositoryError, ReviewId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Session-scoped board storage. Each process holds one in-memory card
/// collection; `replace` swaps the whole sequence, matching the board's
/// immutable-update semantics.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCaseBoard {
    cards: Arc<Mutex<Vec<CaseCard>>>,
}

impl InMemoryCaseBoard {
    pub(crate) fn seeded(cards: Vec<CaseCard>) -> Self {
        Self {
            cards: Arc::new(Mutex::new(cards)),
        }
    }
}

impl CaseRepository for InMemoryCaseBoard {
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

/// Audit adapter that keeps events in memory and mirrors them onto the
/// tracing stream for operators.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAuditTrail {
    events: Arc<Mutex<Vec<AuditEvent>>>,
}

impl InMemoryAuditTrail {
    pub(crate) fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().expect("audit mutex poisoned").clone()
    }
}

impl AuditTrail for InMemoryAuditTrail {
    fn record(&self, event: AuditEvent) -> Result<(), AuditError> {
        info!(
            review_id = %event.review_id,
            officer = %event.officer,
            from = event.from_status.label(),
            to = event.to_status.label(),
            "case status changed"
        );
        self.events
            .lock()
            .expect("audit mutex poisoned")
            .push(event);
        Ok(())
    }
}

/// Review queue the dashboard opens with. Mirrors the desk's standing
/// fixture set until the upstream case feed is wired in.
pub(crate) fn seed_cards() -> Vec<CaseCard> {
    fn card(
        review: &str,
        client_name: &str,
        client: &str,
        risk_score: u8,
        red_flags_count: u32,
        status: CaseStatus,
        officer: &str,
        time_in_queue: &str,
        priority: CasePriority,
    ) -> CaseCard {
        CaseCard {
            review_id: ReviewId(review.to_string()),
            client_name: client_name.to_string(),
            client_id: ClientId(client.to_string()),
            risk_score,
            red_flags_count,
            status,
            assigned_officer: officer.to_string(),
            time_in_queue: time_in_queue.to_string(),
            priority,
        }
    }

    vec![
        card(
            "KYC-2024-001",
            "Hans Keller",
            "CLI-456",
            85,
            3,
            CaseStatus::New,
            "Ana Rodriguez",
            "4 hours",
            CasePriority::Critical,
        ),
        card(
            "KYC-2024-002",
            "Marta Silva",
            "CLI-102",
            72,
            2,
            CaseStatus::New,
            "James Chen",
            "1 day",
            CasePriority::High,
        ),
        card(
            "KYC-2024-003",
            "Dmitri Volkov",
            "CLI-311",
            91,
            4,
            CaseStatus::Review,
            "Ana Rodriguez",
            "2 days",
            CasePriority::Critical,
        ),
        card(
            "KYC-2024-004",
            "Elena Novak",
            "CLI-207",
            58,
            1,
            CaseStatus::Review,
            "Priya Nair",
            "6 hours",
            CasePriority::Medium,
        ),
        card(
            "KYC-2024-005",
            "Omar Haddad",
            "CLI-580",
            76,
            2,
            CaseStatus::Flagged,
            "James Chen",
            "3 days",
            CasePriority::High,
        ),
        card(
            "KYC-2024-006",
            "Sofia Lindqvist",
            "CLI-044",
            23,
            0,
            CaseStatus::Resolved,
            "Priya Nair",
            "5 days",
            CasePriority::Low,
        ),
    ]
}
