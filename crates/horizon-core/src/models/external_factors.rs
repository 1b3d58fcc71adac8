use serde::{Deserialize, Serialize};

/// Qualitative market condition supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketCondition {
    Favorable,
    #[default]
    Neutral,
    Challenging,
}

impl MarketCondition {
    /// Per-step score adjustment contributed by the market condition.
    pub fn adjustment(self) -> f64 {
        match self {
            MarketCondition::Favorable => 2.0,
            MarketCondition::Neutral => 0.0,
            MarketCondition::Challenging => -2.0,
        }
    }
}

/// Declared exogenous adjustments applied to forecast projections.
///
/// `competitor_activity` and `economic_index` are 0–100 indices centered on a
/// neutral 50; `industry_growth` is a fractional rate (0.05 = 5%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalFactors {
    pub market_condition: MarketCondition,
    pub competitor_activity: f64,
    pub economic_index: f64,
    pub industry_growth: f64,
}

impl Default for ExternalFactors {
    /// Neutral factors: indices at their 50 midpoint, no growth.
    fn default() -> Self {
        Self {
            market_condition: MarketCondition::Neutral,
            competitor_activity: 50.0,
            economic_index: 50.0,
            industry_growth: 0.0,
        }
    }
}

impl ExternalFactors {
    /// Combined per-step adjustment (before multiplying by the step index).
    ///
    /// Both indices lift the projection above their 50 midpoint and depress
    /// it below.
    pub fn step_adjustment(&self) -> f64 {
        self.market_condition.adjustment()
            + (self.competitor_activity - 50.0) * 0.01
            + (self.economic_index - 50.0) * 0.02
            + self.industry_growth * 0.1
    }
}
