//! # horizon-forecast
//!
//! State-free, per-axis time-series analysis and projection: linear trend
//! detection with change points, calendar-month seasonality via variance
//! ratio, z-score anomaly flagging, and a short projection horizon with
//! growing uncertainty bounds.
//!
//! ## Analytical models
//!
//! The "models" are a closed set of named analytical strategies (one
//! deterministic correction formula each), not trained models:
//!
//! | Id | Confidence | Correction |
//! |----|------------|------------|
//! | `linear` | 0.85 | none |
//! | `polynomial` | 0.80 | `sin(step × 0.5) × 2` |
//! | `exponential` | 0.75 | `(last − 50) × 0.02 × step` |
//! | `arima` | 0.70 | `cos(step × 0.5) × 1.5` |
//!
//! Decoupled from the scenario simulator: the only inputs are historical
//! per-axis series and optional declared external factors.

pub mod anomaly;
pub mod engine;
pub mod seasonality;
pub mod series;
pub mod strategies;
pub mod trend;

pub use engine::ForecastEngine;
pub use strategies::ForecastModel;
