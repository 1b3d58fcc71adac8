use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SEASONAL_PERIOD;

/// Direction of the linear trend component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    /// Sign used in projection arithmetic: up = +1, down = −1, stable = 0.
    pub fn sign(self) -> f64 {
        match self {
            TrendDirection::Up => 1.0,
            TrendDirection::Down => -1.0,
            TrendDirection::Stable => 0.0,
        }
    }
}

/// Linear trend analysis of a historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub direction: TrendDirection,
    /// OLS slope of value vs. index.
    pub slope: f64,
    /// `|slope| / (max − min)`, clamped to [0, 1].
    pub strength: f64,
    /// Indices where the series level shifts abruptly.
    pub change_points: Vec<usize>,
}

/// Seasonality analysis (fixed 12-month period).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityAnalysis {
    pub detected: bool,
    /// Always 12 (calendar months).
    pub period: usize,
    /// Ratio of monthly-mean variance to total variance.
    pub strength: f64,
    /// Per-calendar-month mean deviation from the series mean (January first).
    /// Months without data are 0.
    pub monthly_profile: [f64; SEASONAL_PERIOD],
}

impl SeasonalityAnalysis {
    /// "No seasonality" marker used for short series.
    pub fn none() -> Self {
        Self {
            detected: false,
            period: SEASONAL_PERIOD,
            strength: 0.0,
            monthly_profile: [0.0; SEASONAL_PERIOD],
        }
    }
}

/// A historical point whose z-score exceeds the anomaly threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub index: usize,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub z_score: f64,
    /// `min(1, z / 3)`.
    pub severity: f64,
}

/// One projected future point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    /// Projected score, clamped to [0, 100].
    pub value: f64,
    /// Model confidence for this step, decreasing with horizon.
    pub confidence: f64,
    pub upper_bound: f64,
    pub lower_bound: f64,
}

/// Immutable output bundle of one forecast invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Id of the analytical model used.
    pub model: String,
    /// Projected points, one per future period, in order.
    pub predictions: Vec<ForecastPoint>,
    pub trend: TrendAnalysis,
    pub seasonality: SeasonalityAnalysis,
    pub anomalies: Vec<Anomaly>,
}
