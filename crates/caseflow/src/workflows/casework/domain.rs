use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for client records supplied by upstream systems.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub String);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for a review case on the triage board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub String);

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Risk grade attached to a single historical transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionRisk {
    Low,
    Medium,
    High,
}

/// One entry from the client's transaction history. Amounts are signed;
/// negative values are outgoing transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub description: String,
    pub amount: i64,
    pub risk: TransactionRisk,
}

impl TransactionRecord {
    pub const fn is_outgoing(&self) -> bool {
        self.amount < 0
    }
}

/// Press coverage linked to the client by the screening provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdverseMediaItem {
    pub source: String,
    pub headline: String,
    pub date: NaiveDate,
}

/// Free-text screening statuses from the compliance systems of record.
/// Specific sentinel values trigger recommendation rules; anything else
/// is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    #[serde(default)]
    pub sanctions: String,
    #[serde(default)]
    pub pep: String,
    #[serde(default)]
    pub aml: String,
}

/// Consumer-supplied client snapshot, immutable for the duration of one
/// recommendation pass. Optional collections default to empty so a
/// sparse payload never fails evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub client_id: ClientId,
    pub full_name: String,
    pub risk_rating: String,
    #[serde(default)]
    pub transaction_history: Vec<TransactionRecord>,
    #[serde(default)]
    pub adverse_media: Vec<AdverseMediaItem>,
    #[serde(default)]
    pub compliance_status: ComplianceStatus,
}

/// Workflow status of a review case. All four statuses are mutually
/// reachable; `resolved` only demands a confirmation reason on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    New,
    Review,
    Flagged,
    Resolved,
}

impl CaseStatus {
    /// Column order used by the board views.
    pub const ALL: [CaseStatus; 4] = [
        CaseStatus::New,
        CaseStatus::Review,
        CaseStatus::Flagged,
        CaseStatus::Resolved,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CaseStatus::New => "new",
            CaseStatus::Review => "review",
            CaseStatus::Flagged => "flagged",
            CaseStatus::Resolved => "resolved",
        }
    }

    pub const fn column_title(self) -> &'static str {
        match self {
            CaseStatus::New => "New Cases",
            CaseStatus::Review => "Under Review",
            CaseStatus::Flagged => "Flagged",
            CaseStatus::Resolved => "Resolved",
        }
    }
}

/// Board-level priority assigned when the case was opened. Deliberately
/// a different vocabulary from recommendation urgency; the two must not
/// be unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CasePriority {
    Critical,
    High,
    Medium,
    Low,
}

impl CasePriority {
    pub const fn label(self) -> &'static str {
        match self {
            CasePriority::Critical => "CRITICAL",
            CasePriority::High => "HIGH",
            CasePriority::Medium => "MEDIUM",
            CasePriority::Low => "LOW",
        }
    }
}

/// One case card on the review board. Cards are created upstream with
/// status `new`; only the transition policy mutates `status`, and cards
/// are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseCard {
    pub review_id: ReviewId,
    pub client_name: String,
    pub client_id: ClientId,
    pub risk_score: u8,
    pub red_flags_count: u32,
    pub status: CaseStatus,
    pub assigned_officer: String,
    pub time_in_queue: String,
    pub priority: CasePriority,
}
