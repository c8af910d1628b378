use crate::infra::{seed_cards, InMemoryAuditTrail, InMemoryCaseBoard};
use caseflow::error::AppError;
use caseflow::workflows::casework::{
    AdverseMediaItem, AuditTrail, BoardFilter, CasePriority, CaseRepository, CaseStatus,
    CaseTriageService, ClientId, ClientProfile, ComplianceStatus, QuickAction, Recommendation,
    ReviewId, TransactionRecord, TransactionRisk, TransitionReceipt, TransitionRequest,
    TriageConfig,
};
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Restrict the board walkthrough to one priority (e.g. CRITICAL)
    #[arg(long)]
    pub(crate) priority: Option<String>,
    /// Skip the recommendation portion of the demo
    #[arg(long)]
    pub(crate) skip_recommendations: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Path to a client profile JSON document
    #[arg(long)]
    pub(crate) profile: PathBuf,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.profile)?;
    let profile: ClientProfile = serde_json::from_str(&raw)?;

    let engine_config = TriageConfig::default();
    let repository = Arc::new(InMemoryCaseBoard::default());
    let audit = Arc::new(InMemoryAuditTrail::default());
    let service = CaseTriageService::new(repository, audit, engine_config);

    println!(
        "Recommendations for {} ({})",
        profile.full_name, profile.client_id
    );
    render_recommendations(&service.recommendations(&profile));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        priority,
        skip_recommendations,
    } = args;

    let filter = match priority.as_deref() {
        Some(raw) => BoardFilter::Priority(parse_priority(raw)?),
        None => BoardFilter::All,
    };

    let config = TriageConfig::default();
    let repository = Arc::new(InMemoryCaseBoard::seeded(seed_cards()));
    let audit = Arc::new(InMemoryAuditTrail::default());
    let service = CaseTriageService::new(repository, audit.clone(), config);

    println!("Case triage board demo");
    render_board(&service, &filter)?;

    println!("\nQuick action: flag KYC-2024-002");
    let receipt = service
        .quick_action(
            ReviewId("KYC-2024-002".to_string()),
            QuickAction::Flag,
            None,
            "Ana Rodriguez",
        )
        .map_err(AppError::from)?;
    render_receipt(&receipt);

    println!("\nDrag KYC-2024-005 to resolved (no reason supplied)");
    let receipt = service
        .transition(
            TransitionRequest {
                review_id: ReviewId("KYC-2024-005".to_string()),
                destination: CaseStatus::Resolved,
                reason: None,
            },
            "James Chen",
        )
        .map_err(AppError::from)?;
    render_receipt(&receipt);

    println!("\nRetry with a confirmation reason");
    let receipt = service
        .transition(
            TransitionRequest {
                review_id: ReviewId("KYC-2024-005".to_string()),
                destination: CaseStatus::Resolved,
                reason: Some("Source of funds verified with documentation".to_string()),
            },
            "James Chen",
        )
        .map_err(AppError::from)?;
    render_receipt(&receipt);

    println!("\nBoard after the moves");
    render_board(&service, &filter)?;

    let events = audit.events();
    if events.is_empty() {
        println!("\nAudit trail: empty");
    } else {
        println!("\nAudit trail");
        for event in &events {
            let reason_note = match &event.reason {
                Some(reason) => format!(" | reason: {reason}"),
                None => String::new(),
            };
            println!(
                "- {} ({}) {} -> {} by {}{}",
                event.review_id,
                event.client_name,
                event.from_status.label(),
                event.to_status.label(),
                event.officer,
                reason_note
            );
        }
    }

    if skip_recommendations {
        return Ok(());
    }

    let profile = demo_client_profile();
    println!(
        "\nRecommendations for {} ({})",
        profile.full_name, profile.client_id
    );
    render_recommendations(&service.recommendations(&profile));

    Ok(())
}

fn render_board<R, A>(
    service: &CaseTriageService<R, A>,
    filter: &BoardFilter,
) -> Result<(), AppError>
where
    R: CaseRepository + 'static,
    A: AuditTrail + 'static,
{
    let board = service.board(filter).map_err(AppError::from)?;

    println!(
        "Badges: total {} | new {} | review {} | flagged {} | resolved {}",
        board.counts.total,
        board.counts.new,
        board.counts.review,
        board.counts.flagged,
        board.counts.resolved
    );
    for column in &board.columns {
        println!("{} ({})", column.title, column.cards.len());
        for view in &column.cards {
            let escalation = if view.needs_escalation {
                " [escalate]"
            } else {
                ""
            };
            println!(
                "  - {} {} | risk {} ({:?}) | {} | {} flags | {}{}",
                view.card.review_id,
                view.card.client_name,
                view.card.risk_score,
                view.risk_band,
                view.card.priority.label(),
                view.card.red_flags_count,
                view.card.assigned_officer,
                escalation
            );
        }
    }
    Ok(())
}

fn render_receipt(receipt: &TransitionReceipt) {
    match receipt {
        TransitionReceipt::Completed { notice } => println!("  {}", notice.message()),
        TransitionReceipt::ReasonRequired { review_id } => {
            println!("  Resolution blocked for {review_id}: a reason is required")
        }
        TransitionReceipt::NoOp { review_id } => {
            println!("  {review_id} already sits in that column")
        }
    }
}

fn render_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("  No action required");
        return;
    }
    for recommendation in recommendations {
        println!(
            "- [{}] {} ({})",
            recommendation.urgency.label(),
            recommendation.title,
            recommendation.estimated_time
        );
        println!("    {}", recommendation.description);
        println!("    Next step: {}", recommendation.action);
        println!("    Basis: {}", recommendation.reason);
    }
}

fn parse_priority(raw: &str) -> Result<CasePriority, AppError> {
    match raw.to_ascii_uppercase().as_str() {
        "CRITICAL" => Ok(CasePriority::Critical),
        "HIGH" => Ok(CasePriority::High),
        "MEDIUM" => Ok(CasePriority::Medium),
        "LOW" => Ok(CasePriority::Low),
        other => Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("unknown priority {other}"),
        ))),
    }
}

/// Client used by the recommendation walkthrough. Trips every rule so
/// the ranked output shows the full urgency spread.
fn demo_client_profile() -> ClientProfile {
    let date = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

    ClientProfile {
        client_id: ClientId("CLI-456".to_string()),
        full_name: "Hans Keller".to_string(),
        risk_rating: "High".to_string(),
        transaction_history: vec![
            TransactionRecord {
                date: date(2024, 2, 12),
                description: "Wire transfer to shell entity".to_string(),
                amount: -5_000,
                risk: TransactionRisk::High,
            },
            TransactionRecord {
                date: date(2024, 2, 19),
                description: "Inbound wire from offshore account".to_string(),
                amount: 12_000,
                risk: TransactionRisk::High,
            },
            TransactionRecord {
                date: date(2024, 3, 2),
                description: "Card spend, travel".to_string(),
                amount: 900,
                risk: TransactionRisk::Medium,
            },
            TransactionRecord {
                date: date(2024, 3, 9),
                description: "Cash withdrawal".to_string(),
                amount: -1_200,
                risk: TransactionRisk::Medium,
            },
        ],
        adverse_media: vec![
            AdverseMediaItem {
                source: "Financial Times".to_string(),
                headline: "Regulator probes offshore network".to_string(),
                date: date(2024, 1, 28),
            },
            AdverseMediaItem {
                source: "Reuters".to_string(),
                headline: "Shell company ties under scrutiny".to_string(),
                date: date(2024, 2, 14),
            },
        ],
        compliance_status: ComplianceStatus {
            sanctions: "Potential Match".to_string(),
            pep: "Domestic PEP - Class 2".to_string(),
            aml: "High Risk".to_string(),
        },
    }
}
