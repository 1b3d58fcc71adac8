//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONFIDENCE_LEVEL, DEFAULT_FORECAST_PERIODS, DEFAULT_ITERATIONS,
    DEFAULT_VARIABILITY_FACTOR, VOLATILITY_ALERT_THRESHOLD,
};
use crate::errors::{SimulationError, SimulationResult};

/// Monte Carlo simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of Monte Carlo trials. Must be at least 1.
    pub iterations: u32,
    /// Confidence level in percent, strictly inside (0, 100).
    pub confidence_level: f64,
    /// Volatility threshold used by the recommendation rules.
    pub risk_threshold: f64,
    /// Per-trial perturbation amplitude: continuous variables receive uniform
    /// noise in `[-variability_factor × 100, +variability_factor × 100]`.
    pub variability_factor: f64,
    /// Seed for the perturbation source. `None` draws one from entropy; a
    /// fixed seed makes `simulate()` bit-reproducible.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            risk_threshold: VOLATILITY_ALERT_THRESHOLD,
            variability_factor: DEFAULT_VARIABILITY_FACTOR,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Check that the configuration is usable.
    pub fn validate(&self) -> SimulationResult<()> {
        if self.iterations < 1 {
            return Err(SimulationError::InvalidConfig {
                reason: "iterations must be at least 1".into(),
            });
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 100.0) {
            return Err(SimulationError::InvalidConfig {
                reason: format!(
                    "confidence_level must be inside (0, 100), got {}",
                    self.confidence_level
                ),
            });
        }
        if self.variability_factor < 0.0 {
            return Err(SimulationError::InvalidConfig {
                reason: "variability_factor must be non-negative".into(),
            });
        }
        Ok(())
    }
}

/// Forecast configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Forecast model id ("linear", "polynomial", "exponential", "arima").
    pub model: String,
    /// Number of future periods to project.
    pub periods: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            model: "linear".to_string(),
            periods: DEFAULT_FORECAST_PERIODS,
        }
    }
}

/// Top-level engine configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub simulation: SimulationConfig,
    pub forecast: ForecastConfig,
}

impl EngineConfig {
    /// Parse a TOML document. Missing sections and fields fall back to defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = SimulationConfig {
            iterations: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_confidence_level_bounds_exclusive() {
        for level in [0.0, 100.0, -5.0, 120.0] {
            let config = SimulationConfig {
                confidence_level: level,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "level {level} should be rejected");
        }
    }

    #[test]
    fn test_from_toml_partial() {
        let config = EngineConfig::from_toml_str(
            r#"
            [simulation]
            iterations = 2000
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation.iterations, 2000);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.forecast.periods, DEFAULT_FORECAST_PERIODS);
    }
}
