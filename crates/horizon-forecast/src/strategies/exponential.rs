use super::ForecastModel;

/// Drifts away from the 50 midpoint proportionally to the horizon: series
/// above the midpoint accelerate upward, series below decay further.
pub struct ExponentialModel;

impl ForecastModel for ExponentialModel {
    fn id(&self) -> &'static str {
        "exponential"
    }

    fn confidence(&self) -> f64 {
        0.75
    }

    fn correction(&self, last_value: f64, step: usize) -> f64 {
        (last_value - 50.0) * 0.02 * step as f64
    }
}
