//! Interaction-effect resolution and application.

use horizon_core::{AxisScores, InteractionEffect, VariableAssignment};

use crate::registry::VariableRegistry;

/// Effects whose activation predicate holds under the assignment, in
/// declaration order.
pub fn resolve_effects<'a>(
    registry: &'a VariableRegistry,
    assignment: &VariableAssignment,
) -> Vec<&'a InteractionEffect> {
    registry
        .effects()
        .iter()
        .filter(|effect| effect.is_active(assignment))
        .collect()
}

/// Apply active effects to the scores.
///
/// For every active effect, every affected axis is multiplied by the effect's
/// magnitude; effects compound multiplicatively in declaration order. The
/// literal magnitude is applied regardless of the effect's advisory kind, and
/// no clamping happens here.
///
/// Returns the adjusted scores and the aggregate per-axis multiplier.
pub fn apply_effects(
    scores: &AxisScores,
    active: &[&InteractionEffect],
) -> (AxisScores, AxisScores) {
    let mut adjusted = *scores;
    let mut multipliers = AxisScores::uniform(1.0);

    for effect in active {
        for &axis in &effect.affected_axes {
            adjusted.scale(axis, effect.magnitude);
            multipliers.scale(axis, effect.magnitude);
        }
    }

    (adjusted, multipliers)
}
