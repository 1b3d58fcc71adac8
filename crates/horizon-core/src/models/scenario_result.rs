use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, AxisScores};
use crate::effect::InteractionKind;
use crate::models::recommendation::Recommendation;

/// Per-axis confidence bounds from Monte Carlo sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Per-axis risk metrics from Monte Carlo sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Population standard deviation of the axis samples.
    pub volatility: f64,
    /// Sample minimum.
    pub worst_case: f64,
    /// Sample maximum.
    pub best_case: f64,
    /// Fraction of samples strictly above the point projection.
    pub probability: f64,
}

/// Summary of an interaction effect that was active in the evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedEffect {
    pub id: String,
    pub label: String,
    pub kind: InteractionKind,
    pub magnitude: f64,
    pub affected_axes: Vec<Axis>,
}

/// Immutable output bundle of one full scenario evaluation.
///
/// Newly allocated per invocation; the engine never caches or mutates results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scores before any variable impact.
    pub baseline_scores: AxisScores,
    /// Deterministic projection after base impact and interaction effects,
    /// clamped to [0, 100].
    pub projected_scores: AxisScores,
    /// Per-axis Monte Carlo confidence bounds.
    pub confidence_intervals: BTreeMap<Axis, ConfidenceInterval>,
    /// Per-axis Monte Carlo risk metrics.
    pub risk_metrics: BTreeMap<Axis, RiskMetrics>,
    /// Interaction effects that were active for the point projection.
    pub interaction_effects: Vec<AppliedEffect>,
    /// Aggregate per-axis multiplier the active effects applied.
    pub interaction_multipliers: AxisScores,
    /// Variable key → axis → estimated partial derivative.
    pub sensitivity: BTreeMap<String, BTreeMap<Axis, f64>>,
    /// Ranked findings, highest priority first.
    pub recommendations: Vec<Recommendation>,
}
