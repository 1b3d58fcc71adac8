//! Finite-difference sensitivity analysis.
//!
//! Boolean and categorical variables are excluded: a ±step bump has no
//! meaning on their value spaces, and the engine does not approximate them.
//! Only continuous variables appear in the output map.

use std::collections::BTreeMap;

use horizon_core::constants::SENSITIVITY_STEP;
use horizon_core::{Axis, AxisScores, VariableAssignment, VariableKind, VariableValue};

use crate::impact::compute_base_impact;
use crate::registry::VariableRegistry;

/// Estimate each continuous variable's marginal effect on each axis.
///
/// For each continuous variable: recompute the base impact with that one
/// variable's value raised by +10 on the 0–100 scale (all others fixed) and
/// record `(perturbed − base) / 10` per axis — the marginal effect per unit of
/// the forcing variable. The bumped value still passes through the declared
/// range clamp, so a variable already at its maximum reports zero sensitivity.
pub fn analyze_sensitivity(
    registry: &VariableRegistry,
    baseline: &AxisScores,
    assignment: &VariableAssignment,
) -> BTreeMap<String, BTreeMap<Axis, f64>> {
    let base = compute_base_impact(registry, baseline, assignment);
    let mut sensitivity = BTreeMap::new();

    for variable in registry.variables() {
        if !matches!(variable.kind, VariableKind::Continuous { .. }) {
            continue;
        }
        let current = match assignment.get(&variable.key) {
            Some(VariableValue::Continuous(v)) => *v,
            Some(_) => continue,
            None => match variable.default_value {
                VariableValue::Continuous(v) => v,
                _ => continue,
            },
        };

        let mut bumped = assignment.clone();
        bumped.insert(
            variable.key.clone(),
            VariableValue::Continuous(current + SENSITIVITY_STEP),
        );
        let perturbed = compute_base_impact(registry, baseline, &bumped);

        let per_axis: BTreeMap<Axis, f64> = Axis::ALL
            .iter()
            .map(|&axis| {
                (
                    axis,
                    (perturbed.get(axis) - base.get(axis)) / SENSITIVITY_STEP,
                )
            })
            .collect();
        sensitivity.insert(variable.key.clone(), per_axis);
    }

    sensitivity
}
