/// Forecasting subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("unknown forecast model: {model}")]
    ModelNotFound { model: String },

    #[error("insufficient history: need {required} points, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },
}
