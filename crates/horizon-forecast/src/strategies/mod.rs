//! Analytical projection models.
//!
//! A closed set of named strategies behind one interface. Each "model" is a
//! deterministic correction formula with a fixed base confidence — nothing is
//! learned from data, and the ids exist so callers can pick a correction
//! shape, not a statistical method.

pub mod arima;
pub mod exponential;
pub mod linear;
pub mod polynomial;

pub use arima::ArimaModel;
pub use exponential::ExponentialModel;
pub use linear::LinearModel;
pub use polynomial::PolynomialModel;

use horizon_core::{ForecastError, ForecastResult};

/// One analytical projection strategy.
pub trait ForecastModel: Send + Sync {
    /// Stable id used in `ForecastConfig::model`.
    fn id(&self) -> &'static str;

    /// Base confidence; per-step confidence decays from this value.
    fn confidence(&self) -> f64;

    /// Model-specific correction added at a projection step.
    ///
    /// `last_value` is the final observed value of the series; `step` counts
    /// future periods starting at 1.
    fn correction(&self, last_value: f64, step: usize) -> f64;
}

/// Every registered model, in stable order.
pub fn all() -> &'static [&'static dyn ForecastModel] {
    static MODELS: [&dyn ForecastModel; 4] = [
        &LinearModel,
        &PolynomialModel,
        &ExponentialModel,
        &ArimaModel,
    ];
    &MODELS
}

/// Look up a model by id. Unknown ids fail with `ModelNotFound`.
pub fn resolve(id: &str) -> ForecastResult<&'static dyn ForecastModel> {
    all()
        .iter()
        .find(|model| model.id() == id)
        .copied()
        .ok_or_else(|| ForecastError::ModelNotFound {
            model: id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_ids() {
        for id in ["linear", "polynomial", "exponential", "arima"] {
            assert_eq!(resolve(id).unwrap().id(), id);
        }
    }

    #[test]
    fn test_unknown_id_fails() {
        assert!(matches!(
            resolve("prophet"),
            Err(ForecastError::ModelNotFound { .. })
        ));
    }

    #[test]
    fn test_confidences_within_unit_interval() {
        for model in all() {
            assert!((0.0..=1.0).contains(&model.confidence()));
        }
    }
}
