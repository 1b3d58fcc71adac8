//! ScenarioEngine — orchestrates the full evaluation pipeline.

use tracing::info;

use horizon_core::models::{AppliedEffect, ScenarioResult};
use horizon_core::{
    AxisScores, InteractionEffect, ScenarioVariable, SimulationConfig, SimulationResult,
    VariableAssignment,
};

use crate::cancel::CancelToken;
use crate::impact::compute_base_impact;
use crate::interactions::{apply_effects, resolve_effects};
use crate::monte_carlo;
use crate::recommendations::generate_recommendations;
use crate::registry::VariableRegistry;
use crate::sensitivity::analyze_sensitivity;

/// The scenario simulation engine.
///
/// Holds the variable registry and the Monte Carlo configuration; both are
/// written only through explicit update operations, never during a run. Every
/// invocation allocates a fresh result — the engine caches nothing.
pub struct ScenarioEngine {
    registry: VariableRegistry,
    config: SimulationConfig,
}

impl ScenarioEngine {
    pub fn new(registry: VariableRegistry, config: SimulationConfig) -> Self {
        Self { registry, config }
    }

    pub fn with_default_config(registry: VariableRegistry) -> Self {
        Self::new(registry, SimulationConfig::default())
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Insert or replace a variable definition.
    pub fn upsert_variable(&mut self, variable: ScenarioVariable) {
        self.registry.insert_variable(variable);
    }

    /// Replace an existing variable definition.
    pub fn update_variable(&mut self, variable: ScenarioVariable) -> SimulationResult<()> {
        self.registry.update_variable(variable)
    }

    pub fn remove_variable(&mut self, key: &str) -> Option<ScenarioVariable> {
        self.registry.remove_variable(key)
    }

    pub fn add_effect(&mut self, effect: InteractionEffect) {
        self.registry.insert_effect(effect);
    }

    /// Deterministic projection for one assignment: base impact, interaction
    /// effects, final clamp. No randomness involved.
    pub fn evaluate(&self, baseline: &AxisScores, assignment: &VariableAssignment) -> AxisScores {
        monte_carlo::evaluate_assignment(&self.registry, baseline, assignment)
    }

    /// Full evaluation: deterministic projection, Monte Carlo uncertainty,
    /// sensitivity, and recommendations.
    pub fn run(
        &self,
        baseline: &AxisScores,
        assignment: &VariableAssignment,
    ) -> SimulationResult<ScenarioResult> {
        self.run_inner(baseline, assignment, None)
    }

    /// Like [`ScenarioEngine::run`], but abortable between trials.
    pub fn run_with_cancel(
        &self,
        baseline: &AxisScores,
        assignment: &VariableAssignment,
        cancel: &CancelToken,
    ) -> SimulationResult<ScenarioResult> {
        self.run_inner(baseline, assignment, Some(cancel))
    }

    fn run_inner(
        &self,
        baseline: &AxisScores,
        assignment: &VariableAssignment,
        cancel: Option<&CancelToken>,
    ) -> SimulationResult<ScenarioResult> {
        self.config.validate()?;

        let base_scores = compute_base_impact(&self.registry, baseline, assignment);
        let active = resolve_effects(&self.registry, assignment);
        let (adjusted, interaction_multipliers) = apply_effects(&base_scores, &active);
        let projected_scores = adjusted.clamped();

        let interaction_effects: Vec<AppliedEffect> = active
            .iter()
            .map(|effect| AppliedEffect {
                id: effect.id.clone(),
                label: effect.label.clone(),
                kind: effect.kind,
                magnitude: effect.magnitude,
                affected_axes: effect.affected_axes.iter().copied().collect(),
            })
            .collect();

        let outcome = monte_carlo::simulate(
            &self.registry,
            baseline,
            assignment,
            &projected_scores,
            &self.config,
            cancel,
        )?;

        let sensitivity = analyze_sensitivity(&self.registry, baseline, assignment);
        let recommendations = generate_recommendations(
            &projected_scores,
            &outcome.risk_metrics,
            &sensitivity,
            self.config.risk_threshold,
        );

        info!(
            iterations = self.config.iterations,
            active_effects = interaction_effects.len(),
            recommendations = recommendations.len(),
            "scenario evaluation complete"
        );

        Ok(ScenarioResult {
            baseline_scores: *baseline,
            projected_scores,
            confidence_intervals: outcome.confidence_intervals,
            risk_metrics: outcome.risk_metrics,
            interaction_effects,
            interaction_multipliers,
            sensitivity,
            recommendations,
        })
    }
}
