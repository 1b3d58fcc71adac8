/// Horizon engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of fixed outcome axes.
pub const AXIS_COUNT: usize = 5;

/// Lower bound of every axis score.
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of every axis score.
pub const SCORE_MAX: f64 = 100.0;

/// Default number of Monte Carlo trials.
pub const DEFAULT_ITERATIONS: u32 = 500;

/// Default confidence level (percent) for Monte Carlo intervals.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 95.0;

/// Default per-trial variability factor for continuous variables.
pub const DEFAULT_VARIABILITY_FACTOR: f64 = 0.1;

/// Volatility above which a risk-mitigation recommendation is emitted.
pub const VOLATILITY_ALERT_THRESHOLD: f64 = 15.0;

/// Best-case gap above which an opportunity recommendation is emitted.
pub const OPPORTUNITY_GAP_THRESHOLD: f64 = 20.0;

/// Finite-difference step (on the 0–100 input scale) for sensitivity analysis.
pub const SENSITIVITY_STEP: f64 = 10.0;

/// Minimum historical points for any forecast.
pub const MIN_HISTORY: usize = 3;

/// Minimum historical points for seasonality detection.
pub const MIN_SEASONAL_HISTORY: usize = 12;

/// Minimum historical points for anomaly detection.
pub const MIN_ANOMALY_HISTORY: usize = 5;

/// Fixed seasonal period (calendar months).
pub const SEASONAL_PERIOD: usize = 12;

/// Z-score threshold for anomaly flagging.
pub const ANOMALY_Z_THRESHOLD: f64 = 2.5;

/// Default number of projected periods.
pub const DEFAULT_FORECAST_PERIODS: usize = 6;
