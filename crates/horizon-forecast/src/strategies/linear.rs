use super::ForecastModel;

/// Pure trend extrapolation; no correction term.
pub struct LinearModel;

impl ForecastModel for LinearModel {
    fn id(&self) -> &'static str {
        "linear"
    }

    fn confidence(&self) -> f64 {
        0.85
    }

    fn correction(&self, _last_value: f64, _step: usize) -> f64 {
        0.0
    }
}
