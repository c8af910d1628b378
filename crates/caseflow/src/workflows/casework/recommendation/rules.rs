use super::super::config::TriageConfig;
use super::super::domain::{ClientProfile, TransactionRecord, TransactionRisk};
use super::{ActionType, Recommendation, Urgency};

const SANCTIONS_POTENTIAL_MATCH: &str = "Potential Match";
const PEP_MARKER: &str = "PEP";
const AML_HIGH_RISK: &str = "High Risk";

/// Run every rule unconditionally against the same profile, in the
/// fixed order the desk reviews findings. Each rule emits at most one
/// recommendation; none depends on another rule's outcome.
pub(crate) fn evaluate(client: &ClientProfile, config: &TriageConfig) -> Vec<Recommendation> {
    [
        high_risk_transaction(client),
        adverse_media(client),
        sanctions_match(client),
        pep_status(client),
        high_aml_risk(client),
        transaction_pattern(client, config),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Largest high-risk transaction by absolute amount; earlier entries
/// win ties so repeated evaluation stays deterministic.
fn high_risk_transaction(client: &ClientProfile) -> Option<Recommendation> {
    let largest = client
        .transaction_history
        .iter()
        .filter(|tx| tx.risk == TransactionRisk::High)
        .fold(None::<&TransactionRecord>, |current, candidate| {
            match current {
                Some(held) if candidate.amount.unsigned_abs() > held.amount.unsigned_abs() => {
                    Some(candidate)
                }
                Some(held) => Some(held),
                None => Some(candidate),
            }
        })?;

    let direction = if largest.is_outgoing() {
        "outgoing"
    } else {
        "incoming"
    };

    Some(Recommendation {
        id: format!("{}-high-risk-tx", client.client_id),
        urgency: Urgency::Urgent,
        title: "High-Risk Transaction Detected".to_string(),
        description: format!(
            "A {} {direction} transaction was flagged as high risk.",
            group_thousands(largest.amount.unsigned_abs())
        ),
        action: "Contact client for transaction justification and supporting documentation"
            .to_string(),
        estimated_time: "2 hours".to_string(),
        action_type: ActionType::Contact,
        reason: "High-value transaction to/from high-risk jurisdiction requires immediate \
                 verification"
            .to_string(),
    })
}

fn adverse_media(client: &ClientProfile) -> Option<Recommendation> {
    let count = client.adverse_media.len();
    if count == 0 {
        return None;
    }

    let noun = if count == 1 { "story" } else { "stories" };
    Some(Recommendation {
        id: format!("{}-adverse-media", client.client_id),
        urgency: Urgency::Medium,
        title: "Adverse Media Alert".to_string(),
        description: format!("{count} negative news {noun} linked to this client."),
        action: "Escalate to Compliance department for review and risk assessment".to_string(),
        estimated_time: "1 day".to_string(),
        action_type: ActionType::Escalate,
        reason: "Adverse media may indicate reputational or regulatory risk requiring compliance \
                 review"
            .to_string(),
    })
}

/// Exact sentinel match only; near-misses from the screening provider
/// stay quiet.
fn sanctions_match(client: &ClientProfile) -> Option<Recommendation> {
    if client.compliance_status.sanctions != SANCTIONS_POTENTIAL_MATCH {
        return None;
    }

    Some(Recommendation {
        id: format!("{}-sanctions-match", client.client_id),
        urgency: Urgency::Urgent,
        title: "Potential Sanctions Match".to_string(),
        description: "Client name shows potential match on sanctions screening.".to_string(),
        action: "Immediately freeze account and escalate to Head of Compliance".to_string(),
        estimated_time: "Immediate".to_string(),
        action_type: ActionType::Escalate,
        reason: "Potential sanctions violations require immediate action to avoid regulatory \
                 penalties"
            .to_string(),
    })
}

/// Substring match: provider strings vary ("PEP - Class 1", "Domestic
/// PEP"), so anything carrying the marker qualifies.
fn pep_status(client: &ClientProfile) -> Option<Recommendation> {
    if !client.compliance_status.pep.contains(PEP_MARKER) {
        return None;
    }

    Some(Recommendation {
        id: format!("{}-pep-status", client.client_id),
        urgency: Urgency::Low,
        title: "PEP Status Identified".to_string(),
        description: format!("Client classified as {}.", client.compliance_status.pep),
        action: "Schedule Enhanced Due Diligence (EDD) review".to_string(),
        estimated_time: "3-5 days".to_string(),
        action_type: ActionType::Schedule,
        reason: "PEP status requires enhanced due diligence procedures per regulatory requirements"
            .to_string(),
    })
}

fn high_aml_risk(client: &ClientProfile) -> Option<Recommendation> {
    if client.compliance_status.aml != AML_HIGH_RISK {
        return None;
    }

    Some(Recommendation {
        id: format!("{}-high-aml-risk", client.client_id),
        urgency: Urgency::Medium,
        title: "High AML Risk Rating".to_string(),
        description: "Client's AML risk assessment is rated as High.".to_string(),
        action: "Initiate comprehensive AML review and update risk profile".to_string(),
        estimated_time: "2-3 days".to_string(),
        action_type: ActionType::Review,
        reason: "High AML risk requires regular monitoring and updated risk assessment".to_string(),
    })
}

fn transaction_pattern(client: &ClientProfile, config: &TriageConfig) -> Option<Recommendation> {
    let count = client
        .transaction_history
        .iter()
        .filter(|tx| tx.risk == TransactionRisk::Medium)
        .count();
    if count < config.medium_pattern_minimum {
        return None;
    }

    Some(Recommendation {
        id: format!("{}-pattern-risk", client.client_id),
        urgency: Urgency::Low,
        title: "Transaction Pattern Review Needed".to_string(),
        description: format!("{count} medium-risk transactions detected."),
        action: "Review transaction patterns for potential structuring or unusual activity"
            .to_string(),
        estimated_time: "4 hours".to_string(),
        action_type: ActionType::Review,
        reason: "Multiple medium-risk transactions may indicate emerging risk patterns".to_string(),
    })
}

/// Comma-grouped rendering of an amount for officer-facing copy.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index != 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
