//! Monte Carlo uncertainty quantification.
//!
//! Repeatedly perturbs continuous variable values, re-runs the full
//! evaluation, and aggregates per-axis sample distributions into confidence
//! intervals and risk metrics. Trials are independent and run on the rayon
//! pool; each trial derives its own `ChaCha8Rng` from `base_seed + trial`, so
//! results are bit-identical for a fixed seed regardless of thread scheduling.

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use tracing::debug;

use horizon_core::models::{ConfidenceInterval, RiskMetrics};
use horizon_core::{
    Axis, AxisScores, SimulationConfig, SimulationError, SimulationResult, VariableAssignment,
    VariableKind, VariableValue,
};

use crate::cancel::CancelToken;
use crate::impact::{clamp_to_range, compute_base_impact};
use crate::interactions::{apply_effects, resolve_effects};
use crate::registry::VariableRegistry;

/// Aggregated Monte Carlo output for one simulation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloOutcome {
    /// The seed the trials actually used. Equals `config.seed` when one was
    /// given, otherwise the entropy draw; re-running with this seed
    /// reproduces the outcome bit for bit.
    pub seed: u64,
    pub confidence_intervals: BTreeMap<Axis, ConfidenceInterval>,
    pub risk_metrics: BTreeMap<Axis, RiskMetrics>,
}

/// Run the Monte Carlo simulation around the given assignment.
///
/// `point_projection` is the deterministic (non-perturbed) projection the
/// probability metric compares against.
pub fn simulate(
    registry: &VariableRegistry,
    baseline: &AxisScores,
    assignment: &VariableAssignment,
    point_projection: &AxisScores,
    config: &SimulationConfig,
    cancel: Option<&CancelToken>,
) -> SimulationResult<MonteCarloOutcome> {
    config.validate()?;

    let base_seed = config.seed.unwrap_or_else(rand::random);
    debug!(iterations = config.iterations, base_seed, "starting monte carlo trials");

    let samples: Vec<AxisScores> = (0..config.iterations)
        .into_par_iter()
        .map(|trial| -> SimulationResult<AxisScores> {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                return Err(SimulationError::Cancelled);
            }
            let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(trial as u64));
            let perturbed = perturb_assignment(registry, assignment, config, &mut rng);
            Ok(evaluate_assignment(registry, baseline, &perturbed))
        })
        .collect::<SimulationResult<Vec<_>>>()?;

    Ok(aggregate(&samples, point_projection, config, base_seed))
}

/// One full deterministic evaluation: base impact → interaction effects →
/// final clamp to [0, 100].
pub fn evaluate_assignment(
    registry: &VariableRegistry,
    baseline: &AxisScores,
    assignment: &VariableAssignment,
) -> AxisScores {
    let scores = compute_base_impact(registry, baseline, assignment);
    let active = resolve_effects(registry, assignment);
    let (adjusted, _) = apply_effects(&scores, &active);
    adjusted.clamped()
}

/// Add uniform noise to every continuous variable's value, clamped to its
/// declared range. Boolean and categorical variables are not perturbed.
fn perturb_assignment(
    registry: &VariableRegistry,
    assignment: &VariableAssignment,
    config: &SimulationConfig,
    rng: &mut ChaCha8Rng,
) -> VariableAssignment {
    let amplitude = config.variability_factor * 100.0;
    let mut perturbed = assignment.clone();

    for (key, value) in perturbed.iter_mut() {
        let Some(variable) = registry.variable(key) else {
            continue;
        };
        if let (VariableKind::Continuous { min, max, .. }, VariableValue::Continuous(v)) =
            (&variable.kind, *value)
        {
            let noise = if amplitude > 0.0 {
                rng.gen_range(-amplitude..=amplitude)
            } else {
                0.0
            };
            *value = VariableValue::Continuous(clamp_to_range(key, v + noise, *min, *max));
        }
    }

    perturbed
}

/// Collapse per-trial scores into per-axis intervals and risk metrics.
///
/// Percentile and moment statistics are order-independent, so the merge does
/// not depend on trial completion order.
fn aggregate(
    samples: &[AxisScores],
    point_projection: &AxisScores,
    config: &SimulationConfig,
    seed: u64,
) -> MonteCarloOutcome {
    let n = samples.len();
    let mut confidence_intervals = BTreeMap::new();
    let mut risk_metrics = BTreeMap::new();

    for axis in Axis::ALL {
        let mut axis_samples: Vec<f64> = samples.iter().map(|s| s.get(axis)).collect();
        axis_samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let lower_pct = (100.0 - config.confidence_level) / 2.0;
        let upper_pct = (100.0 + config.confidence_level) / 2.0;
        confidence_intervals.insert(
            axis,
            ConfidenceInterval {
                lower: axis_samples[percentile_index(lower_pct, n)],
                upper: axis_samples[percentile_index(upper_pct, n)],
            },
        );

        let point = point_projection.get(axis);
        let above = axis_samples.iter().filter(|&&v| v > point).count();
        risk_metrics.insert(
            axis,
            RiskMetrics {
                volatility: axis_samples.iter().population_std_dev(),
                worst_case: axis_samples[0],
                best_case: axis_samples[n - 1],
                probability: above as f64 / n as f64,
            },
        );
    }

    MonteCarloOutcome {
        seed,
        confidence_intervals,
        risk_metrics,
    }
}

/// `floor(percentile / 100 × n)`, clamped into `[0, n − 1]`.
fn percentile_index(percentile: f64, n: usize) -> usize {
    let index = (percentile / 100.0 * n as f64).floor();
    (index.max(0.0) as usize).min(n - 1)
}
