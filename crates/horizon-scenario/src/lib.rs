//! # horizon-scenario
//!
//! Multi-variable scenario simulation: deterministic base projection,
//! conditional interaction effects, Monte Carlo uncertainty quantification,
//! finite-difference sensitivity, and rule-based recommendations.
//!
//! ## Pipeline
//!
//! | Stage | Module |
//! |-------|--------|
//! | Base impact | `impact` |
//! | Interaction effects | `interactions` |
//! | Monte Carlo trials | `monte_carlo` |
//! | Sensitivity | `sensitivity` |
//! | Recommendations | `recommendations` |
//!
//! All stages are pure and synchronous; the only state is the
//! [`VariableRegistry`], which is written only through explicit update
//! operations and never during a simulation run.

pub mod cancel;
pub mod engine;
pub mod impact;
pub mod interactions;
pub mod monte_carlo;
pub mod recommendations;
pub mod registry;
pub mod sensitivity;

pub use cancel::CancelToken;
pub use engine::ScenarioEngine;
pub use monte_carlo::MonteCarloOutcome;
pub use registry::VariableRegistry;
