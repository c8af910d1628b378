use serde::{Deserialize, Serialize};

const DEFAULT_PATTERN_MINIMUM: usize = 2;
const DEFAULT_ESCALATION_THRESHOLD: u8 = 50;

/// Tunable dials shared by the recommendation engine and board views.
/// Defaults reproduce the thresholds the compliance desk reviews with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Minimum count of medium-risk transactions before the pattern
    /// rule emits a review recommendation.
    pub medium_pattern_minimum: usize,
    /// Risk score at or above which a card is marked as needing
    /// escalation. Display annotation only; never blocks a transition.
    pub escalation_risk_threshold: u8,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            medium_pattern_minimum: DEFAULT_PATTERN_MINIMUM,
            escalation_risk_threshold: DEFAULT_ESCALATION_THRESHOLD,
        }
    }
}
