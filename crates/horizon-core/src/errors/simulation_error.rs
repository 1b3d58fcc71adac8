/// Scenario simulation errors.
///
/// All simulation errors are local, synchronous, and non-retryable: the
/// computation is pure, so retrying an invalid call cannot succeed. No partial
/// results accompany an error.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid simulation config: {reason}")]
    InvalidConfig { reason: String },

    #[error("invalid interaction effect: {reason}")]
    InvalidEffect { reason: String },

    #[error("unknown variable: {key}")]
    UnknownVariable { key: String },

    #[error("simulation cancelled")]
    Cancelled,
}
