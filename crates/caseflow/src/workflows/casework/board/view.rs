use serde::{Deserialize, Serialize};

use super::super::domain::{CaseCard, CasePriority, CaseStatus};

/// Narrows column membership without mutating the underlying cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardFilter {
    #[default]
    All,
    Priority(CasePriority),
}

impl BoardFilter {
    pub fn matches(&self, card: &CaseCard) -> bool {
        match self {
            BoardFilter::All => true,
            BoardFilter::Priority(priority) => card.priority == *priority,
        }
    }
}

/// Display band derived from the 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Severe,
    High,
    Elevated,
    Low,
}

impl RiskBand {
    pub const fn for_score(score: u8) -> Self {
        if score >= 86 {
            RiskBand::Severe
        } else if score >= 71 {
            RiskBand::High
        } else if score >= 41 {
            RiskBand::Elevated
        } else {
            RiskBand::Low
        }
    }
}

/// Card enriched with derived display annotations. Neither annotation
/// is persisted or consulted by the transition policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseCardView {
    #[serde(flatten)]
    pub card: CaseCard,
    pub risk_band: RiskBand,
    pub needs_escalation: bool,
}

impl CaseCardView {
    pub fn annotate(card: &CaseCard, escalation_threshold: u8) -> Self {
        Self {
            risk_band: RiskBand::for_score(card.risk_score),
            needs_escalation: card.risk_score >= escalation_threshold,
            card: card.clone(),
        }
    }
}

/// One status column of the filtered board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumnView {
    pub status: CaseStatus,
    pub title: &'static str,
    pub cards: Vec<CaseCardView>,
}

/// Badge counts, always tallied over the unfiltered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardCounts {
    pub total: usize,
    pub new: usize,
    pub review: usize,
    pub flagged: usize,
    pub resolved: usize,
}

impl BoardCounts {
    pub fn tally(cards: &[CaseCard]) -> Self {
        let of_status = |status: CaseStatus| {
            cards.iter().filter(|card| card.status == status).count()
        };
        Self {
            total: cards.len(),
            new: of_status(CaseStatus::New),
            review: of_status(CaseStatus::Review),
            flagged: of_status(CaseStatus::Flagged),
            resolved: of_status(CaseStatus::Resolved),
        }
    }
}

/// Rendered board state: four columns partitioned by status under the
/// active filter, alongside unfiltered badge counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub columns: Vec<BoardColumnView>,
    pub counts: BoardCounts,
}

pub fn snapshot(cards: &[CaseCard], filter: &BoardFilter, escalation_threshold: u8) -> BoardSnapshot {
    let columns = CaseStatus::ALL
        .into_iter()
        .map(|status| BoardColumnView {
            status,
            title: status.column_title(),
            cards: cards
                .iter()
                .filter(|card| card.status == status && filter.matches(card))
                .map(|card| CaseCardView::annotate(card, escalation_threshold))
                .collect(),
        })
        .collect();

    BoardSnapshot {
        columns,
        counts: BoardCounts::tally(cards),
    }
}
