//! Per-subsystem error enums.

pub mod forecast_error;
pub mod simulation_error;

pub use forecast_error::ForecastError;
pub use simulation_error::SimulationError;

/// Result alias for the scenario simulation subsystem.
pub type SimulationResult<T> = std::result::Result<T, SimulationError>;

/// Result alias for the forecasting subsystem.
pub type ForecastResult<T> = std::result::Result<T, ForecastError>;
