use super::ForecastModel;

/// Fixed periodic correction. The name is aspirational: no autoregression is
/// fitted, this is a deterministic cosine wobble like the other strategies.
pub struct ArimaModel;

impl ForecastModel for ArimaModel {
    fn id(&self) -> &'static str {
        "arima"
    }

    fn confidence(&self) -> f64 {
        0.70
    }

    fn correction(&self, _last_value: f64, step: usize) -> f64 {
        (step as f64 * 0.5).cos() * 1.5
    }
}
