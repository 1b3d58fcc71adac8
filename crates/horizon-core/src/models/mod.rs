//! Plain serializable output models consumed by the presentation layer.

pub mod external_factors;
pub mod prediction_result;
pub mod recommendation;
pub mod scenario_result;
pub mod time_series;

pub use external_factors::{ExternalFactors, MarketCondition};
pub use prediction_result::{
    Anomaly, ForecastPoint, PredictionResult, SeasonalityAnalysis, TrendAnalysis, TrendDirection,
};
pub use recommendation::{Priority, Recommendation, RecommendationCategory};
pub use scenario_result::{AppliedEffect, ConfidenceInterval, RiskMetrics, ScenarioResult};
pub use time_series::TimeSeriesPoint;
