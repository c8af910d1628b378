mod rules;

use super::config::TriageConfig;
use super::domain::ClientProfile;
use serde::{Deserialize, Serialize};

/// Stateless engine mapping one client profile to a ranked list of
/// actionable recommendations. Safe to call repeatedly and from any
/// thread; output depends only on the input profile.
pub struct RecommendationEngine {
    config: TriageConfig,
}

impl RecommendationEngine {
    pub fn new(config: TriageConfig) -> Self {
        Self { config }
    }

    /// Evaluate all rules against the profile and return the emissions
    /// ordered by urgency. The sort is stable, so recommendations with
    /// the same urgency keep the fixed rule-evaluation order.
    pub fn recommend(&self, client: &ClientProfile) -> Vec<Recommendation> {
        let mut recommendations = rules::evaluate(client, &self.config);
        recommendations.sort_by_key(|recommendation| recommendation.urgency.rank());
        recommendations
    }
}

/// Total order used to rank recommendations: URGENT < MEDIUM < LOW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Urgent,
    Medium,
    Low,
}

impl Urgency {
    pub const fn rank(self) -> u8 {
        match self {
            Urgency::Urgent => 0,
            Urgency::Medium => 1,
            Urgency::Low => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Urgency::Urgent => "URGENT",
            Urgency::Medium => "MEDIUM",
            Urgency::Low => "LOW",
        }
    }
}

/// Category of follow-up the acting officer is expected to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Contact,
    Escalate,
    Schedule,
    Review,
}

/// One actionable recommendation for a client. Ids are derived from the
/// client id and the emitting rule, so no two recommendations for the
/// same client collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub urgency: Urgency,
    pub title: String,
    pub description: String,
    pub action: String,
    pub estimated_time: String,
    pub action_type: ActionType,
    pub reason: String,
}
