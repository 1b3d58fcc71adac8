//! # horizon-core
//!
//! Foundation crate for the Horizon scenario engine.
//! Defines the axis model, variable and interaction-effect types, result
//! models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod axis;
pub mod config;
pub mod constants;
pub mod effect;
pub mod errors;
pub mod models;
pub mod variable;

// Re-export the most commonly used types at the crate root.
pub use axis::{Axis, AxisScores};
pub use config::{EngineConfig, ForecastConfig, SimulationConfig};
pub use effect::{ActivationFn, InteractionEffect, InteractionKind};
pub use errors::{ForecastError, ForecastResult, SimulationError, SimulationResult};
pub use variable::{ScenarioVariable, VariableAssignment, VariableKind, VariableValue};
