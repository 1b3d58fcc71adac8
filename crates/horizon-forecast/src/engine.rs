//! ForecastEngine — per-axis series analysis and projection.

use std::collections::BTreeMap;

use tracing::info;

use horizon_core::models::{ExternalFactors, ForecastPoint, PredictionResult, TimeSeriesPoint};
use horizon_core::{Axis, ForecastConfig, ForecastResult};

use crate::anomaly;
use crate::seasonality;
use crate::series;
use crate::strategies;
use crate::trend;

/// Seasonal amplitude multiplier applied during projection.
const SEASONAL_PROJECTION_WEIGHT: f64 = 3.0;

/// Trend amplitude multiplier applied per projection step.
const TREND_PROJECTION_WEIGHT: f64 = 2.0;

/// Base growth of the uncertainty spread per √step.
const SPREAD_GROWTH: f64 = 2.0;

/// Confidence lost per projection step.
const CONFIDENCE_DECAY: f64 = 0.05;

/// Floor for reported per-point confidence.
const CONFIDENCE_FLOOR: f64 = 0.1;

/// State-free forecasting engine.
///
/// Holds only its configuration; every invocation re-analyzes the supplied
/// series and allocates a fresh result. Decoupled from the scenario
/// simulator.
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    config: ForecastConfig,
}

impl ForecastEngine {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Analyze one axis's history and project the configured number of
    /// future periods.
    ///
    /// Fails with `InsufficientHistory` below 3 points and `ModelNotFound`
    /// for an unknown model id. No partial results accompany an error.
    pub fn forecast(
        &self,
        history: &[TimeSeriesPoint],
        external: Option<&ExternalFactors>,
    ) -> ForecastResult<PredictionResult> {
        let model = strategies::resolve(&self.config.model)?;
        let sorted = series::prepare(history)?;
        let values = series::values(&sorted);

        let trend = trend::analyze(&values);
        let seasonality = seasonality::analyze(&sorted);
        let anomalies = anomaly::detect(&sorted);

        let last = sorted
            .last()
            .expect("prepare() guarantees a non-empty series");
        let cadence = series::cadence(&sorted);
        let external_step = external.map(ExternalFactors::step_adjustment).unwrap_or(0.0);

        let mut predictions = Vec::with_capacity(self.config.periods);
        for step in 1..=self.config.periods {
            let s = step as f64;
            let mut value = last.value
                + trend.strength * trend.direction.sign() * s * TREND_PROJECTION_WEIGHT;
            if seasonality.detected {
                value += seasonal_factor(step) * seasonality.strength * SEASONAL_PROJECTION_WEIGHT;
            }
            value += external_step * s;
            value += model.correction(last.value, step);
            let value = value.clamp(0.0, 100.0);

            // Uncertainty widens with √step plus a fixed per-model penalty;
            // bounds are deliberately not clamped so widths never shrink.
            let spread = SPREAD_GROWTH * s.sqrt() + (1.0 - model.confidence()) * 20.0;
            predictions.push(ForecastPoint {
                timestamp: last.timestamp + cadence * step as i32,
                value,
                confidence: (model.confidence() - s * CONFIDENCE_DECAY).max(CONFIDENCE_FLOOR),
                upper_bound: value + spread,
                lower_bound: value - spread,
            });
        }

        info!(
            model = model.id(),
            points = sorted.len(),
            periods = self.config.periods,
            anomalies = anomalies.len(),
            "forecast complete"
        );

        Ok(PredictionResult {
            model: model.id().to_string(),
            predictions,
            trend,
            seasonality,
            anomalies,
        })
    }

    /// Forecast every axis's series. Fails on the first axis that cannot be
    /// forecast.
    pub fn forecast_all(
        &self,
        histories: &BTreeMap<Axis, Vec<TimeSeriesPoint>>,
        external: Option<&ExternalFactors>,
    ) -> ForecastResult<BTreeMap<Axis, PredictionResult>> {
        histories
            .iter()
            .map(|(&axis, history)| Ok((axis, self.forecast(history, external)?)))
            .collect()
    }
}

/// Phase of the 12-month seasonal cycle at a future step.
fn seasonal_factor(step: usize) -> f64 {
    (step as f64 / 12.0 * std::f64::consts::TAU).sin()
}
