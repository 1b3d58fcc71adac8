use serde::{Deserialize, Serialize};

/// Recommendation priority. Derived ordering is `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Which rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    RiskMitigation,
    Optimization,
    Opportunity,
}

/// One ranked finding from the deterministic rule engine.
///
/// These are synthesized from Monte Carlo and sensitivity output by fixed
/// rules — no learned model is involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub title: String,
    pub detail: String,
}
