use super::ForecastModel;

/// Adds a gentle oscillating curvature to the trend line.
pub struct PolynomialModel;

impl ForecastModel for PolynomialModel {
    fn id(&self) -> &'static str {
        "polynomial"
    }

    fn confidence(&self) -> f64 {
        0.80
    }

    fn correction(&self, _last_value: f64, step: usize) -> f64 {
        (step as f64 * 0.5).sin() * 2.0
    }
}
